use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use slotmap::{Key, SlotMap};

/// Generic slotmap-backed asset pool behind a read/write lock.
///
/// Storages are shared between the application and the renderer through the
/// [`AssetServer`](crate::assets::AssetServer)'s `Arc`s; readers take short
/// guards while preparing a frame.
#[derive(Debug)]
pub struct AssetStorage<K: Key, V> {
    items: RwLock<SlotMap<K, V>>,
}

impl<K: Key, V> AssetStorage<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Inserts an asset and returns its handle.
    pub fn add(&self, value: V) -> K {
        self.items.write().insert(value)
    }

    pub fn remove(&self, key: K) -> Option<V> {
        self.items.write().remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.items.read().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Read guard over the underlying map.
    pub fn read(&self) -> RwLockReadGuard<'_, SlotMap<K, V>> {
        self.items.read()
    }

    /// Write guard over the underlying map.
    pub fn write(&self) -> RwLockWriteGuard<'_, SlotMap<K, V>> {
        self.items.write()
    }
}

impl<K: Key, V> Default for AssetStorage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
