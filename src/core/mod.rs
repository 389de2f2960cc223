//! The core 3D module: drawables, their motion and the projection.

mod drawable;
mod motion;
mod projection;
mod scene;

pub use drawable::*;
pub use motion::*;
pub use projection::*;
pub use scene::*;
