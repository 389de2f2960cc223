//! Face-authored polyhedron data.
//!
//! Solids are written down as a list of flat-colored polygonal faces. Each
//! face owns its corners, so vertices shared by neighbouring faces are
//! duplicated and every vertex carries its face's color.

/// A convex planar face with `N` corners and a single color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face<const N: usize> {
    /// Corner positions, in winding order.
    pub corners: [[f32; 3]; N],
    /// RGBA color shared by every corner.
    pub color: [f32; 4],
}

/// Flattens the corners of every face into a position buffer.
pub(crate) fn positions<const N: usize>(faces: &[Face<N>]) -> Vec<f32> {
    faces
        .iter()
        .flat_map(|face| face.corners.iter().flatten().copied())
        .collect()
}

/// Repeats each face color once per corner.
pub(crate) fn colors<const N: usize>(faces: &[Face<N>]) -> Vec<f32> {
    faces
        .iter()
        .flat_map(|face| std::iter::repeat(face.color).take(N).flatten())
        .collect()
}

/// Triangulates every face as a fan around its first corner.
///
/// Faces whose corners cannot be addressed with 16-bit indices are left out;
/// the resulting [`BufferGeometry`](super::BufferGeometry) then fails
/// `validate` with `TooManyVertices`.
pub(crate) fn fan_indices<const N: usize>(faces: &[Face<N>]) -> Vec<u16> {
    let mut indices = Vec::with_capacity(faces.len() * N.saturating_sub(2) * 3);

    for face_index in 0..faces.len() {
        let Ok(first) = u16::try_from(face_index * N) else {
            break;
        };
        let Ok(last) = u16::try_from(face_index * N + N.saturating_sub(1)) else {
            break;
        };

        for corner in first + 1..last {
            indices.extend_from_slice(&[first, corner, corner + 1]);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometries::{BufferGeometry, GeometryError};

    const QUAD: [Face<4>; 1] = [Face {
        corners: [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        color: [1.0, 0.0, 0.0, 1.0],
    }];

    #[test]
    fn test_quad_fans_into_two_triangles() {
        assert_eq!(fan_indices(&QUAD), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_colors_repeat_per_corner() {
        let colors = colors(&QUAD);
        assert_eq!(colors.len(), 16);
        assert!(colors.chunks(4).all(|c| c == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_indices_stop_at_sixteen_bits() {
        let faces = vec![QUAD[0]; 16_385];
        let indices = fan_indices(&faces);
        // 16_384 quads cover exactly 65_536 vertices.
        assert_eq!(indices.len(), 16_384 * 6);
        assert_eq!(indices.last(), Some(&u16::MAX));

        let geometry = BufferGeometry {
            position: positions(&faces),
            color: colors(&faces),
            indices,
        };
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::TooManyVertices(16_385 * 4))
        );
    }

    #[test]
    fn test_second_face_indices_are_offset() {
        let faces = [QUAD[0], QUAD[0]];
        let indices = fan_indices(&faces);
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(positions(&faces).len(), 24);
    }
}
