use std::{cell::OnceCell, f64::consts::TAU, rc::Rc};

use glam::{Mat4, Vec3};

use super::{Motion, Oscillator, Placement};
use crate::{
    geometries::{BufferGeometry, GeometryError},
    options::Options,
    renderers::DrawableBuffers,
};

/// Time for a full revolution when nothing else is configured.
pub const DEFAULT_REVOLUTION_MS: f64 = 5000.0;

/// One polyhedron instance: immutable geometry plus a model matrix that the
/// animation loop mutates every tick.
pub struct Drawable {
    /// Label used for GPU objects and logs.
    pub label: String,
    /// The triangular polygon geometry.
    pub geometry: Rc<BufferGeometry>,
    /// The model matrix, which encodes the position and orientation of this
    /// drawable in world space.
    pub model_matrix: Mat4,
    /// Timestamp of the previous update in milliseconds.
    pub last_update_ms: f64,
    /// Time for one full revolution in milliseconds.
    pub revolution_ms: f64,
    /// Per-tick movement.
    pub motion: Motion,
    rotation_axis: Vec3,
    /// Device resident buffers, uploaded once by the renderer.
    pub(crate) buffers: OnceCell<DrawableBuffers>,
}

impl Drawable {
    /// Creates a drawable translated to `translation` that will rotate about
    /// `rotation_axis`.
    pub fn new(
        label: impl Into<String>,
        geometry: Rc<BufferGeometry>,
        translation: Vec3,
        rotation_axis: Vec3,
        motion: Motion,
        now_ms: f64,
    ) -> Self {
        Self {
            label: label.into(),
            geometry,
            model_matrix: Mat4::from_translation(translation),
            last_update_ms: now_ms,
            revolution_ms: DEFAULT_REVOLUTION_MS,
            motion,
            rotation_axis,
            buffers: OnceCell::new(),
        }
    }

    /// Builds the drawable described by `placement`, validating its geometry.
    ///
    /// # Errors
    ///
    /// A [`GeometryError`] if the shape's buffers are inconsistent.
    pub fn from_placement(
        placement: &Placement,
        options: &Options,
        now_ms: f64,
    ) -> Result<Self, GeometryError> {
        let geometry = BufferGeometry::from_geometry(&placement.shape);
        geometry.validate()?;

        let translation = Vec3::from(placement.translation);

        let motion = if placement.bob {
            let [lower, upper] = options.oscillation_bounds;
            Motion::SpinAndBob(Oscillator::new(
                translation.y,
                options.oscillation_step,
                lower,
                upper,
            ))
        } else {
            Motion::Spin
        };

        let mut drawable = Self::new(
            placement.shape.name(),
            Rc::new(geometry),
            translation,
            Vec3::from(placement.rotation_axis),
            motion,
            now_ms,
        );
        drawable.revolution_ms = options.revolution_ms;

        Ok(drawable)
    }

    /// The axis this drawable rotates about, fixed at creation.
    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    /// Advances the drawable to `now_ms`.
    ///
    /// The elapsed time since the previous update is turned into an angle of
    /// `elapsed / revolution * 2π` and the model matrix is right-multiplied by
    /// a rotation of that angle. Timestamps earlier than the previous one
    /// count as no elapsed time.
    pub fn update(&mut self, now_ms: f64) {
        let elapsed = (now_ms - self.last_update_ms).max(0.0);
        self.last_update_ms = now_ms;

        let angle = TAU * elapsed / self.revolution_ms;

        // A zero axis has no direction to rotate about.
        if let Some(axis) = self.rotation_axis.try_normalize() {
            self.model_matrix *= Mat4::from_axis_angle(axis, angle as f32);
        }

        if let Motion::SpinAndBob(oscillator) = &mut self.motion {
            let step = oscillator.advance();
            self.model_matrix *= Mat4::from_translation(Vec3::new(0.0, step, 0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometries::Shape;

    fn drawable(motion: Motion) -> Drawable {
        Drawable::new(
            "test",
            Rc::new(BufferGeometry::from_geometry(&Shape::Pyramid)),
            Vec3::new(1.0, 2.0, -10.0),
            Vec3::new(0.1, 1.0, 0.2),
            motion,
            0.0,
        )
    }

    #[test]
    fn test_starts_translated() {
        let drawable = drawable(Motion::Spin);
        assert_eq!(drawable.model_matrix.w_axis.truncate(), Vec3::new(1.0, 2.0, -10.0));
    }

    #[test]
    fn test_full_revolution_restores_orientation() {
        let mut drawable = drawable(Motion::Spin);
        let before = drawable.model_matrix;
        drawable.update(DEFAULT_REVOLUTION_MS);
        assert!(drawable.model_matrix.abs_diff_eq(before, 1e-4));
        assert_eq!(drawable.last_update_ms, DEFAULT_REVOLUTION_MS);
    }

    #[test]
    fn test_quarter_revolution_rotates() {
        let mut drawable = drawable(Motion::Spin);
        let before = drawable.model_matrix;
        drawable.update(DEFAULT_REVOLUTION_MS / 4.0);
        assert!(!drawable.model_matrix.abs_diff_eq(before, 1e-2));
        // Rotation keeps the translation column.
        assert!(drawable
            .model_matrix
            .w_axis
            .abs_diff_eq(before.w_axis, 1e-5));
    }

    #[test]
    fn test_time_going_backwards_is_ignored() {
        let mut drawable = drawable(Motion::Spin);
        drawable.update(100.0);
        let after = drawable.model_matrix;
        drawable.update(50.0);
        assert!(drawable.model_matrix.abs_diff_eq(after, 1e-6));
    }

    #[test]
    fn test_zero_axis_does_not_rotate() {
        let mut drawable = Drawable::new(
            "still",
            Rc::new(BufferGeometry::from_geometry(&Shape::Octahedron)),
            Vec3::ZERO,
            Vec3::ZERO,
            Motion::Spin,
            0.0,
        );
        drawable.update(1234.0);
        assert_eq!(drawable.model_matrix, Mat4::IDENTITY);
    }

    #[test]
    fn test_bob_translates_after_rotating() {
        let mut drawable = Drawable::new(
            "bob",
            Rc::new(BufferGeometry::from_geometry(&Shape::Octahedron)),
            Vec3::ZERO,
            Vec3::Y,
            Motion::SpinAndBob(Oscillator::new(0.0, 0.1, -6.0, 9.0)),
            0.0,
        );

        // No elapsed time, so only the translation applies.
        drawable.update(0.0);
        assert!(drawable
            .model_matrix
            .w_axis
            .truncate()
            .abs_diff_eq(Vec3::new(0.0, 0.1, 0.0), 1e-6));

        drawable.update(0.0);
        assert!(drawable
            .model_matrix
            .w_axis
            .truncate()
            .abs_diff_eq(Vec3::new(0.0, 0.2, 0.0), 1e-6));
    }
}
