use uuid::Uuid;

use crate::assets::ColorSpace;
use crate::resources::image::Image;

/// Sampler description attached to a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub address_mode_u: wgpu::AddressMode,
    pub address_mode_v: wgpu::AddressMode,
    pub mag_filter: wgpu::FilterMode,
    pub min_filter: wgpu::FilterMode,
    pub mipmap_filter: wgpu::MipmapFilterMode,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
        }
    }
}

/// A 2D texture: image data plus sampling state and color-space tag.
#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub image: Image,
    pub sampler: TextureSampler,
    pub color_space: ColorSpace,
}

impl Texture {
    #[must_use]
    pub fn new(image: Image, color_space: ColorSpace) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            image,
            sampler: TextureSampler::default(),
            color_space,
        }
    }

    /// GPU format for this texture. sRGB images get hardware decode.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        match self.color_space {
            ColorSpace::Srgb => wgpu::TextureFormat::Rgba8UnormSrgb,
            ColorSpace::Linear => wgpu::TextureFormat::Rgba8Unorm,
        }
    }
}
