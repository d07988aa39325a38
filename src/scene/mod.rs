//! Scene graph module.
//!
//! - [`Node`]: hierarchy node carrying a [`Transform`] and component keys
//! - [`Transform`]: position / rotation / scale with cached matrices
//! - [`Scene`]: node arena plus component pools
//! - [`Camera`]: perspective camera component
//! - [`Light`]: light component (ambient / point)
//! - `transform_system`: decoupled world-matrix propagation

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
}
