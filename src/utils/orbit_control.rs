use glam::{Vec2, Vec3};
use winit::event::MouseButton;

use crate::app::input::Input;
use crate::scene::transform::Transform;

/// Orbit camera controls: left-drag rotates around a target point, the
/// wheel zooms. Rotation input is smoothed with exponential damping.
///
/// The controller re-derives its spherical coordinates from the camera
/// transform's current position on every update, so external code (the
/// viewport breakpoint policy, scripted moves) may reposition the camera and
/// orbiting continues from wherever the camera actually is.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    /// The point the camera orbits and looks at.
    pub target: Vec3,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,

            target,
            rotate_delta: Vec2::ZERO,
        }
    }

    /// Advances damping and applies this frame's input to the camera
    /// transform. Must run once per frame before the draw.
    pub fn update(&mut self, transform: &mut Transform, input: &Input, dt: f32) {
        let screen_height = input.screen_size.y.max(1.0);

        // Spherical coordinates of the current camera position around target.
        let offset = transform.position - self.target;
        let mut radius = offset.length().max(1e-4);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let mut theta = offset.x.atan2(offset.z);

        if input.is_button_pressed(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * std::f32::consts::PI / screen_height;
            self.rotate_delta.x -= input.cursor_delta.x * rotate_per_pixel * self.rotate_speed;
            self.rotate_delta.y -= input.cursor_delta.y * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            // Frame-rate independent damping, normalized to 60 fps.
            let retention = (1.0 - self.damping_factor).powf(dt * 60.0);
            let applied = self.rotate_delta * (1.0 - retention);

            theta += applied.x;
            phi += applied.y;
            self.rotate_delta *= retention;
        } else {
            theta += self.rotate_delta.x;
            phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        const EPS: f32 = 0.0001;
        phi = phi.clamp(EPS, std::f32::consts::PI - EPS);

        if input.scroll_delta.y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(input.scroll_delta.y.abs());
            if input.scroll_delta.y > 0.0 {
                radius *= scale;
            } else {
                radius /= scale;
            }
            radius = radius.clamp(self.min_distance, self.max_distance);
        }

        let sin_phi = phi.sin();
        transform.position = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
        transform.look_at(self.target, Vec3::Y);
    }
}
