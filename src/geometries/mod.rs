//! Geometry generators for the supported solids and their compiled buffers.

mod buffer_geometry;
mod dodecahedron;
mod face;
mod geometry;
mod octahedron;
mod pyramid;
mod shape;

pub use buffer_geometry::*;
pub use dodecahedron::*;
pub use face::Face;
pub use geometry::*;
pub use octahedron::*;
pub use pyramid::*;
pub use shape::*;
