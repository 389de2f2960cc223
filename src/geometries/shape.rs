use serde::{Deserialize, Serialize};

use super::{DodecahedronGeometry, Geometry, OctahedronGeometry, PyramidGeometry};

/// The solids this crate knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Pentagonal pyramid.
    Pyramid,
    /// Regular octahedron.
    Octahedron,
    /// Dodecahedron.
    Dodecahedron,
}

impl Shape {
    /// Every shape, in scene order.
    pub const ALL: [Shape; 3] = [Shape::Pyramid, Shape::Octahedron, Shape::Dodecahedron];

    /// Human readable name, used for GPU labels and logs.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Pyramid => "pyramid",
            Shape::Octahedron => "octahedron",
            Shape::Dodecahedron => "dodecahedron",
        }
    }

    fn generator(self) -> &'static dyn Geometry {
        match self {
            Shape::Pyramid => &PyramidGeometry,
            Shape::Octahedron => &OctahedronGeometry,
            Shape::Dodecahedron => &DodecahedronGeometry,
        }
    }
}

impl Geometry for Shape {
    fn vertices(&self) -> Vec<f32> {
        self.generator().vertices()
    }

    fn colors(&self) -> Vec<f32> {
        self.generator().colors()
    }

    fn indices(&self) -> Vec<u16> {
        self.generator().indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometries::BufferGeometry;

    #[test]
    fn test_every_shape_is_valid() {
        for shape in Shape::ALL {
            let geometry = BufferGeometry::from_geometry(&shape);
            assert_eq!(geometry.validate(), Ok(()), "{}", shape.name());
        }
    }

    #[test]
    fn test_index_counts() {
        let counts: Vec<usize> = Shape::ALL
            .iter()
            .map(|shape| shape.indices().len())
            .collect();
        assert_eq!(counts, vec![30, 24, 108]);
    }
}
