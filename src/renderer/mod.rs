//! Forward renderer.
//!
//! One render pass per frame: clear, draw every visible mesh front-to-back
//! of nothing in particular (opaque only, sorted by material to limit state
//! changes). GPU resources are created lazily the first time a geometry,
//! texture or material is drawn and cached by asset id afterwards — the
//! scene in this crate is built once and rendered forever, so nothing is
//! ever evicted.
//!
//! Bind group convention, shared by both pipelines:
//! - group 0: per-frame globals (camera + lights)
//! - group 1: per-object model matrices, one dynamic-offset buffer
//! - group 2: material uniforms and maps

pub mod context;
pub mod settings;
pub mod uniforms;

use glam::{Mat4, Vec3, Vec4};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use rustc_hash::FxHashMap;
use uuid::Uuid;
use wgpu::util::DeviceExt;

use crate::assets::AssetServer;
use crate::errors::Result;
use crate::resources::geometry::Geometry;
use crate::resources::material::{Material, MaterialKind, MaterialSettings};
use crate::resources::texture::Texture;
use crate::scene::camera::Camera;
use crate::scene::light::LightKind;
use crate::scene::scene::Scene;

use context::WgpuContext;
use settings::RenderSettings;
use uniforms::{
    GlobalUniforms, GradientUniforms, MODEL_UNIFORM_STRIDE, ModelUniforms, StandardUniforms,
    Vertex,
};

const STANDARD_SHADER: &str = include_str!("shaders/standard.wgsl");
const GRADIENT_SHADER: &str = include_str!("shaders/gradient.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PipelineKind {
    Standard,
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PipelineKey {
    kind: PipelineKind,
    cull_mode: Option<wgpu::Face>,
    depth_write: bool,
    depth_test: bool,
}

impl PipelineKey {
    fn new(kind: PipelineKind, settings: MaterialSettings) -> Self {
        Self {
            kind,
            cull_mode: settings.side.cull_mode(),
            depth_write: settings.depth_write,
            depth_test: settings.depth_test,
        }
    }
}

struct GpuGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct GpuTexture {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

struct GpuMaterial {
    bind_group: wgpu::BindGroup,
    kind: PipelineKind,
    settings: MaterialSettings,
}

/// Everything created against the device once the surface exists.
struct GpuResources {
    global_buffer: wgpu::Buffer,
    global_bind_group: wgpu::BindGroup,
    global_layout: wgpu::BindGroupLayout,

    model_layout: wgpu::BindGroupLayout,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_capacity: u32,

    standard_layout: wgpu::BindGroupLayout,
    gradient_layout: wgpu::BindGroupLayout,
    standard_shader: wgpu::ShaderModule,
    gradient_shader: wgpu::ShaderModule,

    pipelines: FxHashMap<PipelineKey, wgpu::RenderPipeline>,
    geometries: FxHashMap<Uuid, GpuGeometry>,
    textures: FxHashMap<Uuid, GpuTexture>,
    materials: FxHashMap<Uuid, GpuMaterial>,

    // Bound in place of maps the material does not provide
    white_texture: GpuTexture,
    flat_normal_texture: GpuTexture,
}

pub struct Renderer {
    settings: RenderSettings,
    context: Option<WgpuContext>,
    gpu: Option<GpuResources>,
    pixel_ratio: f32,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            context: None,
            gpu: None,
            // Deliberately not read from the window here: the host scale
            // factor is only picked up inside resize handling.
            pixel_ratio: 1.0,
        }
    }

    /// Initializes the GPU context against a window surface.
    pub async fn init<W>(&mut self, window: W, width: u32, height: u32) -> Result<()>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let context = WgpuContext::new(window, &self.settings, width, height).await?;
        let gpu = GpuResources::new(&context);

        log::info!(
            "Renderer initialized ({}x{}, {:?})",
            width,
            height,
            context.color_format()
        );

        self.context = Some(context);
        self.gpu = Some(gpu);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// Resizes the output surface and records the display scale factor.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f32) {
        if let Some(context) = &mut self.context {
            context.resize(width, height);
        }
        self.pixel_ratio = scale_factor;
    }

    /// Display scale factor, 1.0 until the first resize event arrives.
    #[inline]
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Current surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.context.as_ref().map_or((0, 0), WgpuContext::size)
    }

    /// Renders one frame of `scene` through `camera`.
    pub fn render(&mut self, scene: &Scene, camera: &Camera, assets: &AssetServer) {
        let (Some(context), Some(gpu)) = (self.context.as_mut(), self.gpu.as_mut()) else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = context.size();
                context.resize(w, h);
                return;
            }
            Err(e) => {
                log::error!("Failed to acquire surface frame: {e:?}");
                return;
            }
        };
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // ==== Globals ====
        let globals = collect_globals(scene, camera);
        context
            .queue
            .write_buffer(&gpu.global_buffer, 0, bytemuck::bytes_of(&globals));

        // ==== Collect visible meshes ====
        struct RenderItem {
            geometry: Uuid,
            material: Uuid,
            model_matrix: Mat4,
        }

        let geometries = assets.geometries.read();
        let materials = assets.materials.read();
        let textures = assets.textures.read();

        let mut render_list: Vec<RenderItem> = Vec::new();

        for (_, node) in &scene.nodes {
            let Some(mesh_key) = node.mesh else { continue };
            let Some(mesh) = scene.meshes.get(mesh_key) else {
                continue;
            };
            if !node.visible || !mesh.visible {
                continue;
            }
            let (Some(geometry), Some(material)) = (
                geometries.get(mesh.geometry),
                materials.get(mesh.material),
            ) else {
                continue;
            };

            let world = node.transform.world_matrix();
            let sphere = geometry.bounding_sphere();
            let center = world.transform_point3(sphere.center);
            let scale = world
                .matrix3
                .x_axis
                .length()
                .max(world.matrix3.y_axis.length())
                .max(world.matrix3.z_axis.length());
            if !camera.frustum().intersects_sphere(center, sphere.radius * scale) {
                continue;
            }

            gpu.prepare_geometry(context, geometry);
            gpu.prepare_material(context, material, |handle| {
                handle.and_then(|h| textures.get(h))
            });

            render_list.push(RenderItem {
                geometry: geometry.uuid,
                material: material.uuid,
                model_matrix: node.transform.world_matrix_as_mat4(),
            });
        }

        // Opaque scene: sort by material to avoid redundant rebinds
        render_list.sort_unstable_by_key(|item| item.material);

        // ==== Per-object uniforms ====
        gpu.ensure_model_capacity(context, render_list.len() as u32);
        for (i, item) in render_list.iter().enumerate() {
            let model_uniforms = ModelUniforms {
                model: item.model_matrix,
                normal_matrix: item.model_matrix.inverse().transpose(),
            };
            context.queue.write_buffer(
                &gpu.model_buffer,
                i as u64 * MODEL_UNIFORM_STRIDE,
                bytemuck::bytes_of(&model_uniforms),
            );
        }

        // ==== Encode the pass ====
        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let bg = scene.background;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Forward Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(bg.x),
                            g: f64::from(bg.y),
                            b: f64::from(bg.z),
                            a: f64::from(bg.w),
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &gpu.global_bind_group, &[]);

            let mut bound_material: Option<Uuid> = None;
            let mut bound_pipeline: Option<PipelineKey> = None;

            for (i, item) in render_list.iter().enumerate() {
                let Some(gpu_material) = gpu.materials.get(&item.material) else {
                    continue;
                };
                let Some(gpu_geometry) = gpu.geometries.get(&item.geometry) else {
                    continue;
                };

                let key = PipelineKey::new(gpu_material.kind, gpu_material.settings);
                if bound_pipeline != Some(key) {
                    // Pipelines were created during prepare, so this lookup
                    // always hits
                    if let Some(pipeline) = gpu.pipelines.get(&key) {
                        pass.set_pipeline(pipeline);
                        bound_pipeline = Some(key);
                    } else {
                        continue;
                    }
                }

                if bound_material != Some(item.material) {
                    pass.set_bind_group(2, &gpu_material.bind_group, &[]);
                    bound_material = Some(item.material);
                }

                let offset = (i as u64 * MODEL_UNIFORM_STRIDE) as u32;
                pass.set_bind_group(1, &gpu.model_bind_group, &[offset]);

                pass.set_vertex_buffer(0, gpu_geometry.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    gpu_geometry.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                pass.draw_indexed(0..gpu_geometry.index_count, 0, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

fn collect_globals(scene: &Scene, camera: &Camera) -> GlobalUniforms {
    let mut ambient = Vec3::ZERO;
    let mut light_position = Vec4::ZERO;
    let mut light_color = Vec4::ZERO;

    for (_, node) in &scene.nodes {
        let Some(light_key) = node.light else { continue };
        let Some(light) = scene.lights.get(light_key) else {
            continue;
        };
        match &light.kind {
            LightKind::Ambient => {
                ambient += light.color * light.intensity;
            }
            LightKind::Point(point) => {
                // One point light is all this renderer carries; later ones
                // are ignored
                if light_color.w == 0.0 {
                    let pos: Vec3 = node.transform.world_matrix().translation.into();
                    light_position = pos.extend(point.range);
                    light_color = light.color.extend(light.intensity);
                }
            }
        }
    }

    GlobalUniforms {
        view_projection: camera.view_projection_matrix(),
        camera_position: camera.position().extend(1.0),
        ambient_color: ambient.extend(1.0),
        light_position,
        light_color,
    }
}

impl GpuResources {
    fn new(context: &WgpuContext) -> Self {
        let device = &context.device;

        let global_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Global Uniforms"),
            contents: bytemuck::bytes_of(&GlobalUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let global_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Global BindGroup Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let global_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global BindGroup"),
            layout: &global_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: global_buffer.as_entire_binding(),
            }],
        });

        let model_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model BindGroup Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ModelUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let initial_capacity = 16;
        let (model_buffer, model_bind_group) =
            Self::create_model_buffer(device, &model_layout, initial_capacity);

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let standard_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Standard Material Layout"),
            entries: &[
                uniform_entry(0),
                texture_entry(1),
                sampler_entry(2),
                texture_entry(3),
                sampler_entry(4),
            ],
        });

        let gradient_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Gradient Material Layout"),
            entries: &[uniform_entry(0)],
        });

        let standard_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Standard Shader"),
            source: wgpu::ShaderSource::Wgsl(STANDARD_SHADER.into()),
        });
        let gradient_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Gradient Shader"),
            source: wgpu::ShaderSource::Wgsl(GRADIENT_SHADER.into()),
        });

        let white_texture = Self::create_color_texture(
            device,
            &context.queue,
            [255, 255, 255, 255],
            wgpu::TextureFormat::Rgba8Unorm,
            "Placeholder White",
        );
        // Tangent-space "straight up" normal
        let flat_normal_texture = Self::create_color_texture(
            device,
            &context.queue,
            [128, 128, 255, 255],
            wgpu::TextureFormat::Rgba8Unorm,
            "Placeholder Normal",
        );

        Self {
            global_buffer,
            global_bind_group,
            global_layout,
            model_layout,
            model_buffer,
            model_bind_group,
            model_capacity: initial_capacity,
            standard_layout,
            gradient_layout,
            standard_shader,
            gradient_shader,
            pipelines: FxHashMap::default(),
            geometries: FxHashMap::default(),
            textures: FxHashMap::default(),
            materials: FxHashMap::default(),
            white_texture,
            flat_normal_texture,
        }
    }

    fn create_model_buffer(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capacity: u32,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniforms"),
            size: u64::from(capacity) * MODEL_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniforms>() as u64),
                }),
            }],
        });

        (buffer, bind_group)
    }

    fn ensure_model_capacity(&mut self, context: &WgpuContext, needed: u32) {
        if needed <= self.model_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        let (buffer, bind_group) =
            Self::create_model_buffer(&context.device, &self.model_layout, capacity);
        self.model_buffer = buffer;
        self.model_bind_group = bind_group;
        self.model_capacity = capacity;
    }

    fn create_color_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: [u8; 4],
        format: wgpu::TextureFormat,
        label: &str,
    ) -> GpuTexture {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());

        GpuTexture {
            _texture: texture,
            view,
            sampler,
        }
    }

    fn prepare_geometry(&mut self, context: &WgpuContext, geometry: &Geometry) {
        if self.geometries.contains_key(&geometry.uuid) {
            return;
        }

        let positions = geometry.positions();
        let normals = geometry.normals();
        let uvs = geometry.uvs();

        let vertices: Vec<Vertex> = (0..positions.len())
            .map(|i| Vertex {
                position: positions[i],
                normal: normals[i],
                uv: uvs[i],
            })
            .collect();

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Geometry Vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Geometry Indices"),
                contents: bytemuck::cast_slice(geometry.indices()),
                usage: wgpu::BufferUsages::INDEX,
            });

        self.geometries.insert(
            geometry.uuid,
            GpuGeometry {
                vertex_buffer,
                index_buffer,
                index_count: geometry.index_count(),
            },
        );
    }

    fn prepare_texture(&mut self, context: &WgpuContext, texture: &Texture) {
        if self.textures.contains_key(&texture.uuid) {
            return;
        }

        let image = &texture.image;
        let gpu_texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Texture"),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: texture.format(),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &gpu_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width * 4),
                rows_per_image: Some(image.height),
            },
            wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
        );

        let view = gpu_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: texture.sampler.address_mode_u,
            address_mode_v: texture.sampler.address_mode_v,
            mag_filter: texture.sampler.mag_filter,
            min_filter: texture.sampler.min_filter,
            mipmap_filter: texture.sampler.mipmap_filter,
            ..Default::default()
        });

        self.textures.insert(
            texture.uuid,
            GpuTexture {
                _texture: gpu_texture,
                view,
                sampler,
            },
        );
    }

    /// Creates the material's bind group and pipeline on first sight.
    ///
    /// `resolve` maps an optional texture handle to the texture asset, if it
    /// is still alive; unresolved maps fall back to neutral placeholders.
    fn prepare_material<'a>(
        &mut self,
        context: &WgpuContext,
        material: &Material,
        resolve: impl Fn(Option<crate::assets::TextureHandle>) -> Option<&'a Texture>,
    ) {
        if !self.materials.contains_key(&material.uuid) {
            let gpu_material = match &material.kind {
                MaterialKind::Standard(standard) => {
                    // Upload referenced maps first so the bind group can use
                    // them
                    for texture in [resolve(standard.map), resolve(standard.normal_map)]
                        .into_iter()
                        .flatten()
                    {
                        self.prepare_texture(context, texture);
                    }

                    let uniforms = StandardUniforms {
                        color: standard.color,
                        emissive: standard.emissive.extend(standard.emissive_intensity),
                        params: Vec4::new(
                            standard.roughness,
                            standard.metalness,
                            standard.normal_scale,
                            0.0,
                        ),
                    };
                    let buffer =
                        context
                            .device
                            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                                label: Some("Standard Material Uniforms"),
                                contents: bytemuck::bytes_of(&uniforms),
                                usage: wgpu::BufferUsages::UNIFORM,
                            });

                    let map = resolve(standard.map)
                        .and_then(|t| self.textures.get(&t.uuid))
                        .unwrap_or(&self.white_texture);
                    let normal = resolve(standard.normal_map)
                        .and_then(|t| self.textures.get(&t.uuid))
                        .unwrap_or(&self.flat_normal_texture);

                    let bind_group =
                        context
                            .device
                            .create_bind_group(&wgpu::BindGroupDescriptor {
                                label: Some("Standard Material BindGroup"),
                                layout: &self.standard_layout,
                                entries: &[
                                    wgpu::BindGroupEntry {
                                        binding: 0,
                                        resource: buffer.as_entire_binding(),
                                    },
                                    wgpu::BindGroupEntry {
                                        binding: 1,
                                        resource: wgpu::BindingResource::TextureView(&map.view),
                                    },
                                    wgpu::BindGroupEntry {
                                        binding: 2,
                                        resource: wgpu::BindingResource::Sampler(&map.sampler),
                                    },
                                    wgpu::BindGroupEntry {
                                        binding: 3,
                                        resource: wgpu::BindingResource::TextureView(&normal.view),
                                    },
                                    wgpu::BindGroupEntry {
                                        binding: 4,
                                        resource: wgpu::BindingResource::Sampler(&normal.sampler),
                                    },
                                ],
                            });

                    GpuMaterial {
                        bind_group,
                        kind: PipelineKind::Standard,
                        settings: standard.settings,
                    }
                }
                MaterialKind::Gradient(gradient) => {
                    let uniforms = GradientUniforms {
                        color1: gradient.color1.extend(1.0),
                        color2: gradient.color2.extend(1.0),
                        color3: gradient.color3.extend(1.0),
                    };
                    let buffer =
                        context
                            .device
                            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                                label: Some("Gradient Material Uniforms"),
                                contents: bytemuck::bytes_of(&uniforms),
                                usage: wgpu::BufferUsages::UNIFORM,
                            });

                    let bind_group =
                        context
                            .device
                            .create_bind_group(&wgpu::BindGroupDescriptor {
                                label: Some("Gradient Material BindGroup"),
                                layout: &self.gradient_layout,
                                entries: &[wgpu::BindGroupEntry {
                                    binding: 0,
                                    resource: buffer.as_entire_binding(),
                                }],
                            });

                    GpuMaterial {
                        bind_group,
                        kind: PipelineKind::Gradient,
                        settings: gradient.settings,
                    }
                }
            };

            self.materials.insert(material.uuid, gpu_material);
        }

        let key = PipelineKey::new(
            match material.kind {
                MaterialKind::Standard(_) => PipelineKind::Standard,
                MaterialKind::Gradient(_) => PipelineKind::Gradient,
            },
            material.settings(),
        );
        self.ensure_pipeline(context, key);
    }

    fn ensure_pipeline(&mut self, context: &WgpuContext, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }

        let (shader, material_layout) = match key.kind {
            PipelineKind::Standard => (&self.standard_shader, &self.standard_layout),
            PipelineKind::Gradient => (&self.gradient_shader, &self.gradient_layout),
        };

        let layout = context
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&self.global_layout, &self.model_layout, material_layout],
                immediate_size: 0,
            });

        let pipeline = context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Scene Render Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.color_format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: key.cull_mode,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: context.depth_format,
                    depth_write_enabled: key.depth_write,
                    depth_compare: if key.depth_test {
                        wgpu::CompareFunction::LessEqual
                    } else {
                        wgpu::CompareFunction::Always
                    },
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        self.pipelines.insert(key, pipeline);
    }
}
