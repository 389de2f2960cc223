use super::{
    face::{self, Face},
    Geometry,
};

const RHO: f32 = 1.6;
const INV: f32 = 1.0 / RHO;

/// Pentagonal faces of an (approximate) regular dodecahedron built from the
/// cube corners `(±1, ±1, ±1)` and the rectangle points on each axis plane.
const FACES: [Face<5>; 12] = [
    Face {
        corners: [[RHO, 0.0, INV], [1.0, 1.0, 1.0], [INV, RHO, 0.0], [1.0, 1.0, -1.0], [RHO, 0.0, -INV]],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Face {
        corners: [[RHO, 0.0, INV], [1.0, 1.0, 1.0], [0.0, INV, RHO], [0.0, -INV, RHO], [1.0, -1.0, 1.0]],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Face {
        corners: [[1.0, 1.0, 1.0], [INV, RHO, 0.0], [-INV, RHO, 0.0], [-1.0, 1.0, 1.0], [0.0, INV, RHO]],
        color: [0.0, 0.0, 1.0, 1.0],
    },
    Face {
        corners: [[RHO, 0.0, INV], [RHO, 0.0, -INV], [1.0, -1.0, -1.0], [INV, -RHO, 0.0], [1.0, -1.0, 1.0]],
        color: [0.0, 1.0, 1.0, 1.0],
    },
    Face {
        corners: [[INV, RHO, 0.0], [-INV, RHO, 0.0], [-1.0, 1.0, -1.0], [0.0, INV, -RHO], [1.0, 1.0, -1.0]],
        color: [1.0, 1.0, 0.0, 1.0],
    },
    Face {
        corners: [[RHO, 0.0, -INV], [1.0, 1.0, -1.0], [0.0, INV, -RHO], [0.0, -INV, -RHO], [1.0, -1.0, -1.0]],
        color: [0.5, 0.0, 0.0, 1.0],
    },
    Face {
        corners: [[0.0, -INV, RHO], [0.0, INV, RHO], [-1.0, 1.0, 1.0], [-RHO, 0.0, INV], [-1.0, -1.0, 1.0]],
        color: [0.0, 0.5, 0.0, 1.0],
    },
    Face {
        corners: [[INV, -RHO, 0.0], [1.0, -1.0, 1.0], [0.0, -INV, RHO], [-1.0, -1.0, 1.0], [-INV, -RHO, 0.0]],
        color: [0.0, 0.0, 0.5, 1.0],
    },
    Face {
        corners: [[INV, -RHO, 0.0], [1.0, -1.0, -1.0], [0.0, -INV, -RHO], [-1.0, -1.0, -1.0], [-INV, -RHO, 0.0]],
        color: [0.1, 0.3, 0.2, 1.0],
    },
    Face {
        corners: [[0.0, -INV, -RHO], [0.0, INV, -RHO], [-1.0, 1.0, -1.0], [-RHO, 0.0, -INV], [-1.0, -1.0, -1.0]],
        color: [1.0, 0.0, 1.0, 1.0],
    },
    Face {
        corners: [[-1.0, 1.0, 1.0], [-INV, RHO, 0.0], [-1.0, 1.0, -1.0], [-RHO, 0.0, -INV], [-RHO, 0.0, INV]],
        color: [0.6, 0.5, 0.1, 1.0],
    },
    // Half transparent. Blending is off, so the alpha lands in the framebuffer
    // and only shows where the surface composites premultiplied.
    Face {
        corners: [[-RHO, 0.0, INV], [-1.0, -1.0, 1.0], [-INV, -RHO, 0.0], [-1.0, -1.0, -1.0], [-RHO, 0.0, -INV]],
        color: [0.0, 0.0, 0.0, 0.5],
    },
];

/// Dodecahedron of twelve flat-colored pentagons, each split into a fan of
/// three triangles.
#[derive(Clone, Copy, Debug, Default)]
pub struct DodecahedronGeometry;

impl Geometry for DodecahedronGeometry {
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
    fn test_dodecahedron_counts() {
        let geometry = DodecahedronGeometry;
        assert_eq!(geometry.vertices().len(), 60 * 3);
        assert_eq!(geometry.colors().len(), 60 * 4);
        assert_eq!(geometry.indices().len(), 108);
    }

    #[test]
    fn test_first_pentagon_fan() {
        let indices = DodecahedronGeometry.indices();
        assert_eq!(&indices[..9], &[0, 1, 2, 0, 2, 3, 0, 3, 4]);
        assert_eq!(&indices[99..], &[55, 56, 57, 55, 57, 58, 55, 58, 59]);
    }
}
