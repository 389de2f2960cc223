use super::{
    face::{self, Face},
    Geometry,
};

const APEX: [f32; 3] = [0.0, 10.0, 0.0];
const CENTER: [f32; 3] = [0.0, 0.0, 0.0];
const A: [f32; 3] = [-2.0, 0.0, 3.08];
const B: [f32; 3] = [2.0, 0.0, 3.08];
const C: [f32; 3] = [3.24, 0.0, -0.72];
const D: [f32; 3] = [0.0, 0.0, -3.08];
const E: [f32; 3] = [-3.24, 0.0, -0.72];

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Pentagonal pyramid, ten units tall. The base is split into five black
/// triangles around its center, the sides are colored individually.
const FACES: [Face<3>; 10] = [
    Face { corners: [CENTER, A, B], color: BLACK },
    Face { corners: [CENTER, B, C], color: BLACK },
    Face { corners: [CENTER, C, D], color: BLACK },
    Face { corners: [CENTER, D, E], color: BLACK },
    Face { corners: [CENTER, E, A], color: BLACK },
    Face { corners: [APEX, A, B], color: [0.0, 1.0, 0.0, 1.0] },
    Face { corners: [APEX, B, C], color: [0.0, 0.0, 1.0, 1.0] },
    Face { corners: [APEX, C, D], color: [1.0, 1.0, 0.0, 1.0] },
    Face { corners: [APEX, D, E], color: [1.0, 0.0, 1.0, 1.0] },
    Face { corners: [APEX, E, A], color: [0.0, 1.0, 1.0, 1.0] },
];

/// Pentagonal pyramid with its base on the XZ plane and its apex on +Y.
#[derive(Clone, Copy, Debug, Default)]
pub struct PyramidGeometry;

impl Geometry for PyramidGeometry {
    fn vertices(&self) -> Vec<f32> {
        face::positions(&FACES)
    }

    fn colors(&self) -> Vec<f32> {
        face::colors(&FACES)
    }

    fn indices(&self) -> Vec<u16> {
        face::fan_indices(&FACES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyramid_counts() {
        let geometry = PyramidGeometry;
        assert_eq!(geometry.vertices().len(), 30 * 3);
        assert_eq!(geometry.indices().len(), 30);
        assert_eq!(geometry.indices(), (0..30).collect::<Vec<u16>>());
    }

    #[test]
    fn test_pyramid_base_is_black() {
        let colors = PyramidGeometry.colors();
        assert!(colors[..15 * 4].chunks(4).all(|c| c == BLACK));
        assert_eq!(&colors[15 * 4..16 * 4], &[0.0, 1.0, 0.0, 1.0]);
    }
}
