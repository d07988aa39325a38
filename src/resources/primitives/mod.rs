//! Built-in geometry primitives.

pub mod box_shape;
pub mod sphere;

pub use box_shape::create_box;
pub use sphere::{SphereOptions, create_sphere};
