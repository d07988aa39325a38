use glam::Vec3;

use crate::scene::Scene;

/// Viewport adaptation policy applied on window resize.
///
/// Keeps the camera projection in step with the surface and pulls the camera
/// to a closer, lower eye position on narrow viewports. The policy is a
/// single threshold with two discrete placements, not a continuous function.
///
/// The pixel ratio starts at 1.0 and is recorded only when a resize event
/// delivers the host scale factor — never at startup.
#[derive(Debug, Clone)]
pub struct ViewportController {
    /// Threshold in logical pixels below which the compact eye is used.
    pub breakpoint: f32,
    /// Camera eye for viewports at least `breakpoint` wide.
    pub default_eye: Vec3,
    /// Camera eye for narrower viewports.
    pub compact_eye: Vec3,
    /// Point the camera faces after repositioning.
    pub target: Vec3,

    pixel_ratio: f32,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            breakpoint: 600.0,
            default_eye: Vec3::new(0.0, 2.0, 6.0),
            compact_eye: Vec3::new(0.0, 1.5, 4.0),
            target: Vec3::ZERO,
            pixel_ratio: 1.0,
        }
    }

    /// Scale factor recorded from the last resize event.
    #[inline]
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// The eye position the breakpoint policy picks for a viewport width.
    #[must_use]
    pub fn eye_for_width(&self, logical_width: f32) -> Vec3 {
        if logical_width < self.breakpoint {
            self.compact_eye
        } else {
            self.default_eye
        }
    }

    /// Applies a resize event to the scene's active camera: exact aspect
    /// from the new physical size, scale factor recorded, breakpoint policy
    /// applied to the camera node. Idempotent for identical events.
    pub fn handle_resize(
        &mut self,
        scene: &mut Scene,
        width: u32,
        height: u32,
        scale_factor: f32,
    ) {
        if width == 0 || height == 0 {
            return;
        }

        self.pixel_ratio = scale_factor;

        let aspect = width as f32 / height as f32;
        let logical_width = width as f32 / scale_factor;
        let eye = self.eye_for_width(logical_width);
        let target = self.target;

        if let Some((transform, camera)) = scene.query_main_camera_bundle() {
            camera.set_aspect(aspect);
            transform.position = eye;
            transform.look_at(target, Vec3::Y);
        }
    }
}
