//! Asset storage and loading.
//!
//! [`AssetServer`] owns shared pools for geometries, materials and textures.
//! It is cheap to clone; the renderer keeps its own clone and resolves
//! handles while preparing a frame. Loading is synchronous — every asset in
//! this crate is read once at startup.

pub mod storage;

use std::path::Path;
use std::sync::Arc;

use slotmap::new_key_type;

use crate::errors::Result;
use crate::resources::geometry::Geometry;
use crate::resources::image::Image;
use crate::resources::material::Material;
use crate::resources::texture::Texture;
use storage::AssetStorage;

new_key_type! {
    pub struct GeometryHandle;
    pub struct MaterialHandle;
    pub struct TextureHandle;
}

/// Color space an image's pixel values live in.
///
/// Color maps are authored in sRGB; data maps (normals) are linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    Linear,
}

#[derive(Clone)]
pub struct AssetServer {
    pub geometries: Arc<AssetStorage<GeometryHandle, Geometry>>,
    pub materials: Arc<AssetStorage<MaterialHandle, Material>>,
    pub textures: Arc<AssetStorage<TextureHandle, Texture>>,
}

impl Default for AssetServer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetServer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometries: Arc::new(AssetStorage::new()),
            materials: Arc::new(AssetStorage::new()),
            textures: Arc::new(AssetStorage::new()),
        }
    }

    pub fn add_geometry(&self, geometry: Geometry) -> GeometryHandle {
        self.geometries.add(geometry)
    }

    pub fn add_material(&self, material: Material) -> MaterialHandle {
        self.materials.add(material)
    }

    pub fn add_texture(&self, texture: Texture) -> TextureHandle {
        self.textures.add(texture)
    }

    /// Loads a 2D texture from an image file on disk.
    ///
    /// The decoded image is expanded to RGBA8 regardless of source format.
    pub fn load_texture_from_file(
        &self,
        path: impl AsRef<Path>,
        color_space: ColorSpace,
    ) -> Result<TextureHandle> {
        let path = path.as_ref();
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();

        log::info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );

        let image = Image::new(width, height, decoded.into_raw());
        Ok(self.textures.add(Texture::new(image, color_space)))
    }
}
