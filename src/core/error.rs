use std::path::PathBuf;

use thiserror::Error;

/// Startup failures. Anything in here aborts the session before the
/// first frame; the transform pipeline itself has no failure modes.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    IncompatibleSurface,

    #[error("failed to load texture {path:?}: {source}")]
    Texture {
        path: PathBuf,
        source: image::ImageError,
    },
}
