//! Error Types
//!
//! The main error type [`RingboxError`] covers GPU initialization, window
//! system and asset loading failures. All public APIs that can fail return
//! [`Result<T>`], an alias for `std::result::Result<T, RingboxError>`.

use thiserror::Error;

/// The main error type for the ringbox crate.
#[derive(Error, Debug)]
pub enum RingboxError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// The window surface could not be created or configured.
    #[error("Surface error: {0}")]
    SurfaceError(String),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}

impl From<image::ImageError> for RingboxError {
    fn from(err: image::ImageError) -> Self {
        RingboxError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, RingboxError>`.
pub type Result<T> = std::result::Result<T, RingboxError>;
