//! WebGPU Abstraction Layer (WGPUAL).
//!
//! Owns the surface, device and queue so renderers only deal with pipelines
//! and buffers.

mod gpu;

pub use gpu::*;
