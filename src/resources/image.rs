use uuid::Uuid;

/// CPU-side image data, always RGBA8.
///
/// Decoded formats are expanded to RGBA on load so the GPU upload path has a
/// single layout to deal with.
#[derive(Debug, Clone)]
pub struct Image {
    pub uuid: Uuid,
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Image {
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            uuid: Uuid::new_v4(),
            width,
            height,
            data,
        }
    }

    /// A 1x1 image of a single color. Used as the placeholder bound in
    /// place of missing texture maps.
    #[must_use]
    pub fn from_color(rgba: [u8; 4]) -> Self {
        Self::new(1, 1, rgba.to_vec())
    }
}
