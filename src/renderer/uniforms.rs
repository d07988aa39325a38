//! GPU uniform layouts.
//!
//! All structs are `#[repr(C)]` + bytemuck Pod and match the WGSL structs in
//! `shaders/` field for field. Vec3 fields are widened to Vec4 so the Rust
//! and WGSL layouts agree without hidden padding.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Group 0: per-frame globals shared by every draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_projection: Mat4,
    /// Camera world position, w unused.
    pub camera_position: Vec4,
    /// Accumulated ambient light, premultiplied by intensity; w unused.
    pub ambient_color: Vec4,
    /// Point light world position; w = range.
    pub light_position: Vec4,
    /// Point light color; w = intensity.
    pub light_color: Vec4,
}

impl Default for GlobalUniforms {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            camera_position: Vec4::ZERO,
            ambient_color: Vec4::ZERO,
            light_position: Vec4::ZERO,
            light_color: Vec4::ZERO,
        }
    }
}

/// Group 1: per-object transforms, bound with a dynamic offset into one
/// shared buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model: Mat4,
    /// Inverse-transpose of the model matrix; upper 3x3 transforms normals.
    pub normal_matrix: Mat4,
}

/// Dynamic-offset stride for [`ModelUniforms`]. 256 is the largest
/// `min_uniform_buffer_offset_alignment` across backends.
pub const MODEL_UNIFORM_STRIDE: u64 = 256;

/// Group 2 (standard material).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct StandardUniforms {
    pub color: Vec4,
    /// Emissive color; w = intensity.
    pub emissive: Vec4,
    /// x = roughness, y = metalness, z = normal scale, w unused.
    pub params: Vec4,
}

/// Group 2 (gradient material): the three gradient stops.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GradientUniforms {
    pub color1: Vec4,
    pub color2: Vec4,
    pub color3: Vec4,
}

/// Interleaved vertex layout matching the geometry channels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
    };
}
