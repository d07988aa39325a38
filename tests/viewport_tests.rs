//! Viewport controller and orbit control tests
//!
//! The resize contract: exact aspect, one breakpoint with two camera
//! placements, idempotent events, pixel ratio recorded only on resize.

use glam::Vec3;
use ringbox::app::input::Input;
use ringbox::scene::{Camera, Scene};
use ringbox::{OrbitControls, ViewportController};

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn scene_with_camera() -> Scene {
    let mut scene = Scene::new();
    let camera = Camera::new_perspective(75.0, 1280.0 / 720.0, 0.1, 1000.0);
    let cam_key = scene.add_camera(camera);
    if let Some(node) = scene.get_node_mut(cam_key) {
        node.transform.position = Vec3::new(0.0, 2.0, 6.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }
    scene.active_camera = Some(cam_key);
    scene
}

fn camera_position(scene: &mut Scene) -> Vec3 {
    scene.query_main_camera_bundle().unwrap().0.position
}

// ============================================================================
// Breakpoint policy
// ============================================================================

#[test]
fn resize_below_breakpoint_pulls_camera_close() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    viewport.handle_resize(&mut scene, 599, 800, 1.0);
    assert!(vec3_approx(
        camera_position(&mut scene),
        Vec3::new(0.0, 1.5, 4.0)
    ));
}

#[test]
fn resize_at_breakpoint_uses_default_eye() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    viewport.handle_resize(&mut scene, 600, 800, 1.0);
    assert!(vec3_approx(
        camera_position(&mut scene),
        Vec3::new(0.0, 2.0, 6.0)
    ));
}

#[test]
fn breakpoint_compares_logical_pixels() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    // 1198 physical at 2x scale = 599 logical → compact placement
    viewport.handle_resize(&mut scene, 1198, 800, 2.0);
    assert!(vec3_approx(
        camera_position(&mut scene),
        Vec3::new(0.0, 1.5, 4.0)
    ));

    // 1200 physical at 2x scale = 600 logical → default placement
    viewport.handle_resize(&mut scene, 1200, 800, 2.0);
    assert!(vec3_approx(
        camera_position(&mut scene),
        Vec3::new(0.0, 2.0, 6.0)
    ));
}

#[test]
fn eye_for_width_has_exactly_two_placements() {
    let viewport = ViewportController::new();
    for width in [0.0, 100.0, 599.0, 599.9] {
        assert_eq!(viewport.eye_for_width(width), Vec3::new(0.0, 1.5, 4.0));
    }
    for width in [600.0, 601.0, 1280.0, 10_000.0] {
        assert_eq!(viewport.eye_for_width(width), Vec3::new(0.0, 2.0, 6.0));
    }
}

// ============================================================================
// Aspect and idempotence
// ============================================================================

#[test]
fn resize_sets_exact_aspect() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    viewport.handle_resize(&mut scene, 1024, 768, 1.0);
    let (_, camera) = scene.query_main_camera_bundle().unwrap();
    assert_eq!(camera.aspect, 1024.0 / 768.0);

    viewport.handle_resize(&mut scene, 333, 517, 1.0);
    let (_, camera) = scene.query_main_camera_bundle().unwrap();
    assert_eq!(camera.aspect, 333.0 / 517.0);
}

#[test]
fn identical_resizes_are_idempotent() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    viewport.handle_resize(&mut scene, 500, 700, 1.25);
    let first_pos = camera_position(&mut scene);
    let (_, camera) = scene.query_main_camera_bundle().unwrap();
    let first_aspect = camera.aspect;
    let first_proj = camera.view_projection_matrix();

    viewport.handle_resize(&mut scene, 500, 700, 1.25);
    let second_pos = camera_position(&mut scene);
    let (_, camera) = scene.query_main_camera_bundle().unwrap();

    assert_eq!(first_pos, second_pos);
    assert_eq!(first_aspect, camera.aspect);
    assert_eq!(first_proj, camera.view_projection_matrix());
    assert_eq!(viewport.pixel_ratio(), 1.25);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    let before = camera_position(&mut scene);
    viewport.handle_resize(&mut scene, 0, 800, 1.0);
    viewport.handle_resize(&mut scene, 800, 0, 1.0);
    assert_eq!(camera_position(&mut scene), before);
    // Ignored events also leave the pixel ratio alone
    assert_eq!(viewport.pixel_ratio(), 1.0);
}

#[test]
fn pixel_ratio_defaults_until_first_resize() {
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();

    assert_eq!(viewport.pixel_ratio(), 1.0);
    viewport.handle_resize(&mut scene, 800, 600, 2.0);
    assert_eq!(viewport.pixel_ratio(), 2.0);
}

// ============================================================================
// Orbit controls
// ============================================================================

#[test]
fn orbit_idle_update_keeps_camera_in_place() {
    let mut scene = scene_with_camera();
    let mut controls = OrbitControls::new(Vec3::ZERO);
    let input = Input::new();

    let before = camera_position(&mut scene);
    let (transform, _) = scene.query_main_camera_bundle().unwrap();
    controls.update(transform, &input, 1.0 / 60.0);
    let after = camera_position(&mut scene);

    assert!(vec3_approx(before, after));
}

#[test]
fn orbit_update_composes_with_external_repositioning() {
    // The resize policy moves the camera; the next orbit update must keep
    // orbiting from the new position instead of snapping back
    let mut scene = scene_with_camera();
    let mut viewport = ViewportController::new();
    let mut controls = OrbitControls::new(Vec3::ZERO);
    let input = Input::new();

    viewport.handle_resize(&mut scene, 400, 700, 1.0);
    let repositioned = camera_position(&mut scene);
    assert!(vec3_approx(repositioned, Vec3::new(0.0, 1.5, 4.0)));

    let (transform, _) = scene.query_main_camera_bundle().unwrap();
    controls.update(transform, &input, 1.0 / 60.0);
    assert!(vec3_approx(camera_position(&mut scene), repositioned));
}

#[test]
fn orbit_zoom_changes_distance_only() {
    let mut scene = scene_with_camera();
    let mut controls = OrbitControls::new(Vec3::ZERO);
    let mut input = Input::new();
    input.scroll_delta.y = 2.0;

    let before = camera_position(&mut scene).length();
    let (transform, _) = scene.query_main_camera_bundle().unwrap();
    controls.update(transform, &input, 1.0 / 60.0);
    let after = camera_position(&mut scene).length();

    assert!(after < before, "scrolling up should zoom in");
    assert!(after >= controls.min_distance);
}
