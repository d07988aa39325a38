/// Renderer configuration, fixed at construction time.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub power_preference: wgpu::PowerPreference,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub vsync: bool,
    pub depth_format: wgpu::TextureFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            vsync: true,
            depth_format: wgpu::TextureFormat::Depth32Float,
        }
    }
}
