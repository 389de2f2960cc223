//! Crate-level error types.

use thiserror::Error;

use crate::geometries::GeometryError;

/// Errors produced while setting up or driving the renderer.
#[derive(Error, Debug)]
pub enum Error {
    /// The surface could not be created for the given window or canvas.
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    /// No adapter is compatible with the surface.
    #[error("no compatible graphics adapter is available")]
    AdapterUnavailable,
    /// The adapter refused to hand out a device.
    #[error("failed to request graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    /// Shader compilation or pipeline linking failed.
    #[error("could not initialise shaders: {0}")]
    Shader(String),
    /// A geometry violates a buffer invariant.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
    /// The options are malformed or out of range.
    #[error("invalid options: {0}")]
    Options(String),
    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The surface texture could not be acquired.
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    /// The host environment (event loop, window or DOM) failed.
    #[error("host error: {0}")]
    Host(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
