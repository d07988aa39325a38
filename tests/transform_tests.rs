//! Transform and transform-system tests
//!
//! Tests for:
//! - TRS dirty checking
//! - Euler round-trips and look_at
//! - Hierarchical world-matrix propagation
//! - Pivot-offset rotation (the lid hinge)

use glam::{Mat4, Quat, Vec3};
use ringbox::scene::{Node, Scene, Transform};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform unit tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always rebuilds (force_update starts true)
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.scale = Vec3::splat(2.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());
}

#[test]
fn transform_local_matrix_reflects_trs() {
    let mut t = Transform::new();
    t.position = Vec3::new(10.0, 20.0, 30.0);
    t.scale = Vec3::splat(2.0);
    t.update_local_matrix();

    let mat = Mat4::from(*t.local_matrix());
    let translation = mat.w_axis.truncate();
    assert!(vec3_approx(translation, Vec3::new(10.0, 20.0, 30.0)));
}

#[test]
fn transform_euler_roundtrip() {
    let mut t = Transform::new();
    let (x, y, z) = (0.3, 0.7, 1.2);
    t.set_rotation_euler(x, y, z);

    let euler = t.rotation_euler();
    assert!(approx_eq(euler.x, x));
    assert!(approx_eq(euler.y, y));
    assert!(approx_eq(euler.z, z));
}

#[test]
fn transform_look_at_basic() {
    let mut t = Transform::new();
    t.position = Vec3::ZERO;
    t.look_at(Vec3::new(0.0, 0.0, -10.0), Vec3::Y);

    t.update_local_matrix();
    let mat = Mat4::from(*t.local_matrix());
    // Camera convention: forward is -Z
    let forward = -mat.z_axis.truncate().normalize();
    assert!(vec3_approx(forward, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn transform_look_at_collinear_up_noop() {
    let mut t = Transform::new();
    let original_rotation = t.rotation;
    // Target directly above with up = Y is degenerate
    t.look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y);
    assert_eq!(t.rotation, original_rotation);
}

#[test]
fn transform_mark_dirty_forces_update() {
    let mut t = Transform::new();
    t.update_local_matrix();
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

// ============================================================================
// Hierarchy propagation
// ============================================================================

#[test]
fn hierarchy_chain_world_positions() {
    let mut scene = Scene::new();

    let mut prev = None;
    let mut keys = Vec::new();
    for _ in 0..5 {
        let mut node = Node::new();
        node.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let key = match prev {
            None => scene.add_node(node),
            Some(parent) => scene.add_to_parent(node, parent),
        };
        keys.push(key);
        prev = Some(key);
    }

    scene.update_matrix_world();

    // Node[i] accumulates i+1 unit translations
    for (i, &key) in keys.iter().enumerate() {
        let world = scene.get_node(key).unwrap().world_matrix().translation;
        assert!(
            approx_eq(world.x, (i + 1) as f32),
            "node {i}: expected x={}, got {}",
            i + 1,
            world.x
        );
    }
}

#[test]
fn hierarchy_with_rotation_and_scale() {
    let mut scene = Scene::new();

    let mut parent = Node::new();
    parent.transform.position = Vec3::new(5.0, 0.0, 0.0);
    parent.transform.rotation = Quat::from_rotation_y(FRAC_PI_2);
    parent.transform.scale = Vec3::splat(2.0);
    let parent_key = scene.add_node(parent);

    let mut child = Node::new();
    child.transform.position = Vec3::new(1.0, 0.0, 0.0);
    let child_key = scene.add_to_parent(child, parent_key);

    scene.update_matrix_world();

    // (1,0,0) rotated 90° about Y → (0,0,-1), scaled → (0,0,-2),
    // translated → (5,0,-2)
    let world = scene.get_node(child_key).unwrap().world_matrix().translation;
    assert!(approx_eq(world.x, 5.0));
    assert!(approx_eq(world.z, -2.0));
}

#[test]
fn pivot_rotation_swings_child_about_hinge() {
    // The lid setup: pivot at (0,1,0), lid child at local (0,0.5,0).
    // Rotating the pivot -90° about X must move the lid to the pivot's side,
    // not rotate it in place.
    let mut scene = Scene::new();

    let mut pivot = Node::new();
    pivot.transform.position = Vec3::new(0.0, 1.0, 0.0);
    let pivot_key = scene.add_node(pivot);

    let mut lid = Node::new();
    lid.transform.position = Vec3::new(0.0, 0.5, 0.0);
    let lid_key = scene.add_to_parent(lid, pivot_key);

    scene.update_matrix_world();
    let closed = scene.get_node(lid_key).unwrap().world_matrix().translation;
    assert!(vec3_approx(closed.into(), Vec3::new(0.0, 1.5, 0.0)));

    scene
        .get_node_mut(pivot_key)
        .unwrap()
        .transform
        .rotation = Quat::from_rotation_x(-FRAC_PI_2);
    scene.update_matrix_world();

    // Local (0,0.5,0) rotated -90° about X lands on (0,0,-0.5), so the lid
    // hangs behind the box at the hinge height
    let open = scene.get_node(lid_key).unwrap().world_matrix().translation;
    assert!(vec3_approx(open.into(), Vec3::new(0.0, 1.0, -0.5)));
}

#[test]
fn subtree_update_refreshes_descendants() {
    let mut scene = Scene::new();

    let mut parent = Node::new();
    parent.transform.position = Vec3::new(1.0, 0.0, 0.0);
    let parent_key = scene.add_node(parent);

    let mut child = Node::new();
    child.transform.position = Vec3::new(1.0, 0.0, 0.0);
    let child_key = scene.add_to_parent(child, parent_key);

    scene.update_matrix_world();

    scene.get_node_mut(parent_key).unwrap().transform.position = Vec3::new(10.0, 0.0, 0.0);
    scene.update_subtree(parent_key);

    let world = scene.get_node(child_key).unwrap().world_matrix().translation;
    assert!(approx_eq(world.x, 11.0));
}

#[test]
fn deeply_nested_hierarchy_no_stack_overflow() {
    let depth = 500;
    let mut scene = Scene::new();

    let mut prev = None;
    let mut last = None;
    for _ in 0..depth {
        let mut node = Node::new();
        node.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let key = match prev {
            None => scene.add_node(node),
            Some(parent) => scene.add_to_parent(node, parent),
        };
        prev = Some(key);
        last = Some(key);
    }

    scene.update_matrix_world();

    let world = scene.get_node(last.unwrap()).unwrap().world_matrix().translation;
    assert!(approx_eq(world.x, depth as f32));
}
