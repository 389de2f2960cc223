use thiserror::Error;

use super::Geometry;

/// A broken invariant of a [`BufferGeometry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The position buffer length is not a multiple of three.
    #[error("position buffer holds {0} floats, which is not a whole number of vertices")]
    PartialVertex(usize),
    /// The vertex count does not fit a 16-bit index.
    #[error("{0} vertices cannot be addressed with 16-bit indices")]
    TooManyVertices(usize),
    /// The color buffer does not hold exactly one RGBA value per vertex.
    #[error("expected {expected} color floats for the vertices, found {found}")]
    ColorCount {
        /// Four times the vertex count.
        expected: usize,
        /// Length of the color buffer.
        found: usize,
    },
    /// The index buffer length is not a multiple of three.
    #[error("index buffer holds {0} indices, which is not a whole number of triangles")]
    PartialTriangle(usize),
    /// An index points past the last vertex.
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: u16,
        /// Number of vertices in the geometry.
        vertex_count: usize,
    },
}

/// Shape of a [drawable](crate::core::Drawable) with compiled buffer data.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferGeometry {
    /// Position attribute buffer. Every consecutive triplet specifies the
    /// position of a vertex relative to the geometry's origin.
    pub position: Vec<f32>,
    /// Color attribute buffer. Every consecutive quadruple specifies the RGBA
    /// color of the corresponding vertex in [`position`](Self::position).
    pub color: Vec<f32>,
    /// Every consecutive triplet defines a triangle formed by the vertices at
    /// the specified indices.
    pub indices: Vec<u16>,
}

impl BufferGeometry {
    /// Number of floats per position.
    pub const POSITION_SIZE: usize = 3;
    /// Number of floats per color.
    pub const COLOR_SIZE: usize = 4;

    /// Creates a 3D geometry from the given geometry builder.
    pub fn from_geometry<G: Geometry + ?Sized>(geometry: &G) -> Self {
        Self {
            position: geometry.vertices(),
            color: geometry.colors(),
            indices: geometry.indices(),
        }
    }

    /// Number of vertices described by the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.position.len() / Self::POSITION_SIZE
    }

    /// Number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks that the buffers agree with each other.
    ///
    /// # Errors
    ///
    /// Returns the first [`GeometryError`] found.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.position.len() % Self::POSITION_SIZE != 0 {
            return Err(GeometryError::PartialVertex(self.position.len()));
        }

        let vertex_count = self.vertex_count();

        if vertex_count > usize::from(u16::MAX) + 1 {
            return Err(GeometryError::TooManyVertices(vertex_count));
        }

        if self.color.len() != vertex_count * Self::COLOR_SIZE {
            return Err(GeometryError::ColorCount {
                expected: vertex_count * Self::COLOR_SIZE,
                found: self.color.len(),
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::PartialTriangle(self.indices.len()));
        }

        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| usize::from(index) >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> BufferGeometry {
        BufferGeometry {
            position: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            color: vec![1.0; 12],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_valid_triangle() {
        let geometry = triangle();
        assert_eq!(geometry.validate(), Ok(()));
        assert_eq!(geometry.vertex_count(), 3);
        assert_eq!(geometry.triangle_count(), 1);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut geometry = triangle();
        geometry.indices[2] = 3;
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_color_per_face_is_rejected() {
        let mut geometry = triangle();
        geometry.color.truncate(4);
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::ColorCount {
                expected: 12,
                found: 4
            })
        );
    }

    #[test]
    fn test_partial_triangle() {
        let mut geometry = triangle();
        geometry.indices.push(0);
        assert_eq!(geometry.validate(), Err(GeometryError::PartialTriangle(4)));
    }

    #[test]
    fn test_partial_vertex() {
        let mut geometry = triangle();
        geometry.position.pop();
        assert_eq!(geometry.validate(), Err(GeometryError::PartialVertex(8)));
    }
}
