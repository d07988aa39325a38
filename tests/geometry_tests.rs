//! Primitive geometry tests: channel sizes, normals, bounds.

use glam::Vec3;
use ringbox::{SphereOptions, create_box, create_sphere};

const EPSILON: f32 = 1e-4;

#[test]
fn box_has_four_vertices_per_face() {
    let geo = create_box(2.8, 1.0, 2.8);

    assert_eq!(geo.vertex_count(), 24);
    assert_eq!(geo.index_count(), 36);
    assert_eq!(geo.positions().len(), geo.normals().len());
    assert_eq!(geo.positions().len(), geo.uvs().len());
}

#[test]
fn box_positions_stay_within_half_extents() {
    let geo = create_box(2.8, 1.0, 2.8);

    for p in geo.positions() {
        assert!(p[0].abs() <= 1.4 + EPSILON);
        assert!(p[1].abs() <= 0.5 + EPSILON);
        assert!(p[2].abs() <= 1.4 + EPSILON);
    }
}

#[test]
fn box_normals_are_unit_axis_vectors() {
    let geo = create_box(2.0, 2.0, 2.0);

    for n in geo.normals() {
        let v = Vec3::from_array(*n);
        assert!((v.length() - 1.0).abs() < EPSILON);
        // Exactly one non-zero component on a box
        let nonzero = n.iter().filter(|c| c.abs() > EPSILON).count();
        assert_eq!(nonzero, 1);
    }
}

#[test]
fn box_indices_reference_valid_vertices() {
    let geo = create_box(1.0, 1.0, 1.0);
    let count = geo.vertex_count() as u16;

    for &i in geo.indices() {
        assert!(i < count);
    }
}

#[test]
fn box_bounding_sphere_covers_corners() {
    let geo = create_box(2.8, 1.0, 2.8);
    let sphere = geo.bounding_sphere();

    let expected = Vec3::new(1.4, 0.5, 1.4).length();
    assert!((sphere.radius - expected).abs() < EPSILON);
    assert!(sphere.center.length() < EPSILON);
}

#[test]
fn sphere_vertex_grid_dimensions() {
    let geo = create_sphere(SphereOptions {
        radius: 20.0,
        width_segments: 32,
        height_segments: 32,
    });

    assert_eq!(geo.vertex_count(), 33 * 33);
    assert_eq!(geo.index_count(), 32 * 32 * 6);
}

#[test]
fn sphere_positions_sit_on_radius() {
    let radius = 20.0;
    let geo = create_sphere(SphereOptions {
        radius,
        width_segments: 16,
        height_segments: 12,
    });

    for p in geo.positions() {
        let len = Vec3::from_array(*p).length();
        assert!((len - radius).abs() < 1e-3, "vertex at distance {len}");
    }
}

#[test]
fn sphere_normals_point_outward() {
    let geo = create_sphere(SphereOptions::default());

    for (p, n) in geo.positions().iter().zip(geo.normals()) {
        let pos = Vec3::from_array(*p);
        let normal = Vec3::from_array(*n);
        assert!((normal.length() - 1.0).abs() < EPSILON);
        // Normal is parallel to the position vector on a sphere, except at
        // the poles where the position is near zero length only if radius
        // is zero — it never is here
        if pos.length() > EPSILON {
            assert!(normal.dot(pos.normalize()) > 0.99);
        }
    }
}

#[test]
fn sphere_enforces_minimum_segments() {
    let geo = create_sphere(SphereOptions {
        radius: 1.0,
        width_segments: 1,
        height_segments: 1,
    });

    // Clamped to 3x2
    assert_eq!(geo.vertex_count(), 4 * 3);
}
