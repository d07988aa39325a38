use glam::{Vec3, Vec4};
use uuid::Uuid;

use crate::assets::TextureHandle;

/// Which face side gets rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
    Double,
}

impl Side {
    #[must_use]
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        match self {
            // Rendering front faces means culling back faces, and vice versa.
            Side::Front => Some(wgpu::Face::Back),
            Side::Back => Some(wgpu::Face::Front),
            Side::Double => None,
        }
    }
}

/// Pipeline-affecting material state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialSettings {
    pub side: Side,
    pub depth_write: bool,
    pub depth_test: bool,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            side: Side::Front,
            depth_write: true,
            depth_test: true,
        }
    }
}

/// Lit material: base color modulated by an optional color map, an optional
/// tangent-space normal map, roughness/metalness response and an emissive
/// term. Missing maps degrade to neutral placeholders at bind time.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    pub color: Vec4,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub normal_scale: f32,

    pub map: Option<TextureHandle>,
    pub normal_map: Option<TextureHandle>,

    pub settings: MaterialSettings,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
            normal_scale: 1.0,
            map: None,
            normal_map: None,
            settings: MaterialSettings::default(),
        }
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}

/// Unlit three-stop gradient keyed on the surface v coordinate, blended as
/// `mix(mix(color1, color2, v), color3, v * 0.5)`. Defaults to back-side
/// rendering so a sphere wearing it works as a sky dome seen from inside.
#[derive(Debug, Clone)]
pub struct GradientMaterial {
    pub color1: Vec3,
    pub color2: Vec3,
    pub color3: Vec3,

    pub settings: MaterialSettings,
}

impl GradientMaterial {
    #[must_use]
    pub fn new(color1: Vec3, color2: Vec3, color3: Vec3) -> Self {
        Self {
            color1,
            color2,
            color3,
            settings: MaterialSettings {
                side: Side::Back,
                ..MaterialSettings::default()
            },
        }
    }
}

/// Material component referenced by meshes.
#[derive(Debug, Clone)]
pub enum MaterialKind {
    Standard(StandardMaterial),
    Gradient(GradientMaterial),
}

#[derive(Debug, Clone)]
pub struct Material {
    pub uuid: Uuid,
    pub kind: MaterialKind,
}

impl Material {
    #[must_use]
    pub fn new_standard(color: Vec4) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: MaterialKind::Standard(StandardMaterial::new(color)),
        }
    }

    #[must_use]
    pub fn new_gradient(color1: Vec3, color2: Vec3, color3: Vec3) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: MaterialKind::Gradient(GradientMaterial::new(color1, color2, color3)),
        }
    }

    pub fn as_standard_mut(&mut self) -> Option<&mut StandardMaterial> {
        match &mut self.kind {
            MaterialKind::Standard(m) => Some(m),
            MaterialKind::Gradient(_) => None,
        }
    }

    pub fn as_gradient_mut(&mut self) -> Option<&mut GradientMaterial> {
        match &mut self.kind {
            MaterialKind::Gradient(m) => Some(m),
            MaterialKind::Standard(_) => None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> MaterialSettings {
        match &self.kind {
            MaterialKind::Standard(m) => m.settings,
            MaterialKind::Gradient(m) => m.settings,
        }
    }
}
