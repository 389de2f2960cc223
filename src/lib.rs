//! Rotating polyhedra drawn with WebGPU.
//!
//! A pyramid, an octahedron and a dodecahedron spin about their own axes, one
//! of them also bobbing up and down. The crate runs in a browser canvas (the
//! `web` feature) or a native window (the `native` feature).

mod app;
mod core;
mod error;
mod geometries;
mod options;
mod renderers;
mod wgpual;

#[cfg(feature = "native")]
pub mod native;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use app::*;
pub use self::core::*;
pub use error::*;
pub use geometries::*;
pub use options::*;
pub use renderers::*;
pub use wgpual::*;

// wgpu re-exports
pub use wgpu::PowerPreference;
