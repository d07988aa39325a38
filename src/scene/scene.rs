use glam::Vec4;
use slotmap::SlotMap;

use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::transform_system;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeKey};

/// Scene graph container.
///
/// Pure data layer: the node arena, component pools and global settings.
/// The renderer walks it read-only; the transform system updates world
/// matrices in [`Scene::update`] once per frame before drawing.
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,

    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    /// Clear color used when no sky mesh covers the viewport.
    pub background: Vec4,

    pub active_camera: Option<NodeKey>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
            active_camera: None,
        }
    }

    /// Adds a node under the scene root.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }

        key
    }

    /// Reparents `child` under `parent`, detaching it from its current
    /// parent (or the root list) first.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) {
        if child == parent {
            log::warn!("Cannot attach node to itself");
            return;
        }

        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found during attach");
            self.root_nodes.push(child);
            return;
        }

        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes a node and its whole subtree, including their components.
    pub fn remove_node(&mut self, key: NodeKey) {
        let children = match self.nodes.get(key) {
            Some(node) => node.children.clone(),
            None => return,
        };

        for child in children {
            self.remove_node(child);
        }

        let parent = self.nodes.get(key).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == key)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == key) {
            self.root_nodes.remove(i);
        }

        if let Some(node) = self.nodes.get(key) {
            if let Some(mesh) = node.mesh {
                self.meshes.remove(mesh);
            }
            if let Some(camera) = node.camera {
                self.cameras.remove(camera);
            }
            if let Some(light) = node.light {
                self.lights.remove(light);
            }
        }

        self.nodes.remove(key);
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    // ========================================================================
    // Component helpers
    // ========================================================================

    /// Inserts a mesh component wrapped in a fresh root node.
    pub fn add_mesh(&mut self, mesh: Mesh) -> NodeKey {
        let mut node = Node::new();
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_node(node)
    }

    pub fn add_mesh_to_parent(&mut self, mesh: Mesh, parent: NodeKey) -> NodeKey {
        let mut node = Node::new();
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_to_parent(node, parent)
    }

    pub fn add_camera(&mut self, camera: Camera) -> NodeKey {
        let mut node = Node::new();
        node.camera = Some(self.cameras.insert(camera));
        self.add_node(node)
    }

    pub fn add_light(&mut self, light: Light) -> NodeKey {
        let mut node = Node::new();
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// The active camera's `(Transform, Camera)` pair, for controllers that
    /// need to move the camera node and adjust projection together.
    pub fn query_main_camera_bundle(&mut self) -> Option<(&mut Transform, &mut Camera)> {
        let node_key = self.active_camera?;
        let camera_key = self.nodes.get(node_key)?.camera?;
        let camera = self.cameras.get_mut(camera_key)?;
        let transform = &mut self.nodes.get_mut(node_key)?.transform;
        Some((transform, camera))
    }

    #[must_use]
    pub fn main_camera(&self) -> Option<&Camera> {
        let node_key = self.active_camera?;
        let camera_key = self.nodes.get(node_key)?.camera?;
        self.cameras.get(camera_key)
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// Propagates world matrices through the whole graph. Must run once per
    /// frame before rendering.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &mut self.cameras, &self.root_nodes);
    }

    /// Recomputes world matrices for one subtree only.
    pub fn update_subtree(&mut self, root: NodeKey) {
        transform_system::update_subtree(&mut self.nodes, &mut self.cameras, root);
    }

    /// Per-frame scene update.
    pub fn update(&mut self) {
        self.update_matrix_world();
    }
}
