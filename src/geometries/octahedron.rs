use super::{
    face::{self, Face},
    Geometry,
};

const TOP: [f32; 3] = [0.0, 1.0, 0.0];
const BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];
const FRONT_LEFT: [f32; 3] = [-1.0, 0.0, 1.0];
const FRONT_RIGHT: [f32; 3] = [1.0, 0.0, 1.0];
const BACK_RIGHT: [f32; 3] = [1.0, 0.0, -1.0];
const BACK_LEFT: [f32; 3] = [-1.0, 0.0, -1.0];

const FACES: [Face<3>; 8] = [
    Face { corners: [FRONT_LEFT, FRONT_RIGHT, TOP], color: [0.0, 1.0, 0.0, 1.0] },
    Face { corners: [FRONT_RIGHT, BACK_RIGHT, TOP], color: [0.0, 0.0, 1.0, 1.0] },
    Face { corners: [BACK_RIGHT, BACK_LEFT, TOP], color: [1.0, 1.0, 0.0, 1.0] },
    Face { corners: [BACK_LEFT, FRONT_LEFT, TOP], color: [1.0, 0.0, 1.0, 1.0] },
    Face { corners: [FRONT_LEFT, FRONT_RIGHT, BOTTOM], color: [0.0, 1.0, 1.0, 1.0] },
    Face { corners: [FRONT_RIGHT, BACK_RIGHT, BOTTOM], color: [0.0, 0.5, 0.5, 1.0] },
    Face { corners: [BACK_RIGHT, BACK_LEFT, BOTTOM], color: [0.5, 0.0, 1.0, 1.0] },
    Face { corners: [BACK_LEFT, FRONT_LEFT, BOTTOM], color: [0.5, 0.0, 0.5, 1.0] },
];

/// Octahedron whose equator is a 2x2 square on the XZ plane and whose poles
/// sit one unit above and below it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OctahedronGeometry;

impl Geometry for OctahedronGeometry {
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
    fn test_octahedron_counts() {
        let geometry = OctahedronGeometry;
        assert_eq!(geometry.vertices().len(), 24 * 3);
        assert_eq!(geometry.colors().len(), 24 * 4);
        assert_eq!(geometry.indices().len(), 24);
    }

    #[test]
    fn test_octahedron_poles() {
        let vertices = OctahedronGeometry.vertices();
        let ys: Vec<f32> = vertices.chunks(3).map(|v| v[1]).collect();
        assert_eq!(ys.iter().filter(|&&y| y == 1.0).count(), 4);
        assert_eq!(ys.iter().filter(|&&y| y == -1.0).count(), 4);
    }
}
