use serde::{Deserialize, Serialize};

use super::Drawable;
use crate::{geometries::Shape, options::Options};

/// Where and how one solid is put into the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Which solid to draw.
    pub shape: Shape,
    /// Initial position in world space.
    pub translation: [f32; 3],
    /// Axis the solid spins about. Need not be normalized.
    pub rotation_axis: [f32; 3],
    /// Whether the solid also bobs up and down while spinning.
    #[serde(default)]
    pub bob: bool,
}

impl Placement {
    /// The pyramid on the left, the bobbing octahedron in the middle and the
    /// dodecahedron on the right.
    pub fn defaults() -> Vec<Placement> {
        vec![
            Placement {
                shape: Shape::Pyramid,
                translation: [-10.0, -4.0, -30.0],
                rotation_axis: [0.1, 1.0, 0.2],
                bob: false,
            },
            Placement {
                shape: Shape::Octahedron,
                translation: [0.0, 0.0, -25.0],
                rotation_axis: [0.0, 1.0, 0.0],
                bob: true,
            },
            Placement {
                shape: Shape::Dodecahedron,
                translation: [6.0, 0.0, -20.0],
                rotation_axis: [-0.4, 1.0, 0.1],
                bob: false,
            },
        ]
    }
}

/// Ordered collection of drawables. Draw and update order follow insertion
/// order.
#[derive(Default)]
pub struct Scene {
    /// The drawables, in draw order.
    pub drawables: Vec<Drawable>,
}

impl Scene {
    /// Wraps already created drawables.
    pub fn new(drawables: Vec<Drawable>) -> Self {
        Self { drawables }
    }

    /// Builds every placement in `options` without touching the GPU. The
    /// renderer uploads the buffers when it first sees each drawable.
    ///
    /// # Errors
    ///
    /// Fails if any shape's geometry is inconsistent.
    pub fn from_options(options: &Options, now_ms: f64) -> crate::Result<Self> {
        let drawables = options
            .objects
            .iter()
            .map(|placement| Drawable::from_placement(placement, options, now_ms))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(drawables))
    }

    /// Updates every drawable, in order, to `now_ms`.
    pub fn update(&mut self, now_ms: f64) {
        for drawable in &mut self.drawables {
            drawable.update(now_ms);
        }
    }
}
