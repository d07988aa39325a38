//! CPU-side resource types: geometry, images, textures, materials, meshes.

pub mod geometry;
pub mod image;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod texture;

pub use geometry::{BoundingSphere, Geometry};
pub use image::Image;
pub use material::{GradientMaterial, Material, MaterialKind, MaterialSettings, Side, StandardMaterial};
pub use mesh::Mesh;
pub use texture::{Texture, TextureSampler};
