//! A velvet ring box on a pink gradient sky: the box lid swings open once,
//! then the scene sits there looking pretty while the camera orbits.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3, Vec4};

use ringbox::app::App;
use ringbox::assets::{AssetServer, ColorSpace, TextureHandle};
use ringbox::resources::{Material, Mesh};
use ringbox::scene::{Camera, Light, Node};
use ringbox::{Easing, OrbitControls, SphereOptions, Tween, create_box, create_sphere};

fn main() -> ringbox::Result<()> {
    env_logger::init();

    let mut app = App::new().with_title("Ring Box");

    // 1. Sky dome: gradient seen from inside a large sphere
    let sky_geometry = create_sphere(SphereOptions {
        radius: 20.0,
        width_segments: 32,
        height_segments: 32,
    });
    let sky_material =
        Material::new_gradient(color(0xffc0cb), color(0xffd1dc), color(0xffe4e1));
    let sky_mesh = Mesh::new(
        app.assets.add_geometry(sky_geometry),
        app.assets.add_material(sky_material),
    );
    app.scene.add_mesh(sky_mesh);

    // 2. Velvet material shared by the box base and lid
    let mut velvet = Material::new_standard(Vec4::ONE);
    if let Some(standard) = velvet.as_standard_mut() {
        standard.roughness = 0.8;
        standard.metalness = 0.05;
        standard.emissive = color(0xff4444);
        standard.emissive_intensity = 0.2;
        standard.map = load_texture_or_warn(&app.assets, "assets/red-velvet.jpg", ColorSpace::Srgb);
        standard.normal_map = load_texture_or_warn(
            &app.assets,
            "assets/velvet-normal-map.jpg",
            ColorSpace::Linear,
        );
    }
    let velvet_handle = app.assets.add_material(velvet);

    // 3. Box base
    let base_mesh = Mesh::new(
        app.assets.add_geometry(create_box(2.8, 1.0, 2.8)),
        velvet_handle,
    );
    app.scene.add_mesh(base_mesh);

    // 4. Lid, hinged on a pivot node at the box's back edge height so the
    //    rotation swings the lid open instead of spinning it in place
    let mut pivot = Node::new();
    pivot.transform.position = Vec3::new(0.0, 1.0, 0.0);
    let pivot_key = app.scene.add_node(pivot);

    let lid_mesh = Mesh::new(
        app.assets.add_geometry(create_box(2.8, 0.8, 2.8)),
        velvet_handle,
    );
    let lid_key = app.scene.add_mesh_to_parent(lid_mesh, pivot_key);
    if let Some(lid) = app.scene.get_node_mut(lid_key) {
        lid.transform.position = Vec3::new(0.0, 0.5, 0.0);
    }

    // 5. Lighting rig
    app.scene
        .add_light(Light::new_ambient(Vec3::ONE, 0.3));
    let point_key = app
        .scene
        .add_light(Light::new_point(Vec3::ONE, 0.7, 100.0));
    if let Some(node) = app.scene.get_node_mut(point_key) {
        node.transform.position = Vec3::new(5.0, 5.0, 5.0);
    }

    // 6. Camera
    let camera = Camera::new_perspective(75.0, 1280.0 / 720.0, 0.1, 1000.0);
    let cam_key = app.scene.add_camera(camera);
    if let Some(node) = app.scene.get_node_mut(cam_key) {
        node.transform.position = Vec3::new(0.0, 2.0, 6.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }
    app.scene.active_camera = Some(cam_key);

    // 7. The lid opens once over three seconds; afterwards the sampled
    //    rotation stays pinned at -90 degrees
    let lid_open = Tween::new(0.0, -FRAC_PI_2, 3.0).with_easing(Easing::QuadraticInOut);

    let mut controls = OrbitControls::new(Vec3::ZERO);

    app.set_update_fn(move |scene, _assets, input, time, dt| {
        if let Some(pivot) = scene.get_node_mut(pivot_key) {
            pivot.transform.rotation = Quat::from_rotation_x(lid_open.sample(time));
        }

        if let Some((transform, _camera)) = scene.query_main_camera_bundle() {
            controls.update(transform, input, dt);
        }
    });

    app.run()
}

/// 0xRRGGBB to normalized RGB.
fn color(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Texture loading is allowed to fail: the material then renders with its
/// base color only, which is exactly what the page did when an image path
/// went missing.
fn load_texture_or_warn(
    assets: &AssetServer,
    path: &str,
    color_space: ColorSpace,
) -> Option<TextureHandle> {
    match assets.load_texture_from_file(path, color_space) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Could not load {path}: {e} — rendering without it");
            None
        }
    }
}
