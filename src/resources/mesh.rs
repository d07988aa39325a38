use crate::assets::{GeometryHandle, MaterialHandle};

/// Mesh component: a geometry/material pair attached to a scene node.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub visible: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: GeometryHandle, material: MaterialHandle) -> Self {
        Self {
            geometry,
            material,
            visible: true,
        }
    }
}
