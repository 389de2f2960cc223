//! Renderers that draw drawables onto a surface.

mod forward_renderer;
mod shader_pipeline;

pub use forward_renderer::*;
pub use shader_pipeline::*;
