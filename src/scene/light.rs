use glam::Vec3;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PointLight {
    pub range: f32,
}

/// Light component kind attached to a scene node.
///
/// Ambient lights ignore the owning node's transform; point lights emit
/// from the node's world position.
#[derive(Debug, Clone)]
pub enum LightKind {
    Ambient,
    Point(PointLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Point(PointLight { range }),
        }
    }
}
