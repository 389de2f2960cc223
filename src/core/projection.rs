use std::f32::consts::PI;

use glam::Mat4;

/// Perspective projection parameters, similar to a pinhole camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// The vertical field-of-view in radians.
    pub vfov_radians: f32,
    /// The aspect ratio, usually set to the aspect ratio of the drawing
    /// surface.
    pub aspect: f32,
    /// The near plane of the frustum. Objects closer than this amount in the
    /// view space's z axis will not get rendered. Must be greater than `0.0`
    /// and less than [`far`](Self::far).
    pub near: f32,
    /// The far plane of the frustum. Objects further than this amount in the
    /// view space's z axis will not get rendered. Can be set to
    /// [`INFINITY`](f32::INFINITY).
    pub far: f32,
}

impl Perspective {
    /// Computes the projection matrix, which transforms view-space coordinates
    /// into normalized device coordinates (NDC).
    ///
    /// The NDC is consistent to the [WebGPU NDC][ndc], i.e. depth maps to
    /// `[0, 1]`.
    ///
    /// [ndc]: https://gpuweb.github.io/gpuweb/#coordinate-systems
    pub fn matrix(&self) -> Mat4 {
        let f = (PI * 0.5 - 0.5 * self.vfov_radians).tan();

        let (n33, n34) = if self.far.is_finite() {
            let range_inv = 1.0 / (self.near - self.far);
            (self.far * range_inv, self.far * self.near * range_inv)
        } else {
            (-1.0, -self.near)
        };

        Mat4::from_cols_array(&[
            f / self.aspect,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            n33,
            -1.0,
            0.0,
            0.0,
            n34,
            0.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective(far: f32) -> Perspective {
        Perspective {
            vfov_radians: PI / 4.0,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far,
        }
    }

    #[test]
    fn test_focal_terms() {
        let m = perspective(10000.0).matrix();
        let f = 1.0 / (PI / 8.0).tan();
        assert!((m.x_axis.x - f / (4.0 / 3.0)).abs() < 1e-5);
        assert!((m.y_axis.y - f).abs() < 1e-5);
    }

    #[test]
    fn test_matches_glam_right_handed() {
        let ours = perspective(100.0).matrix();
        let reference = Mat4::perspective_rh(PI / 4.0, 4.0 / 3.0, 1.0, 100.0);
        assert!(ours.abs_diff_eq(reference, 1e-5));
    }

    #[test]
    fn test_depth_range() {
        let m = perspective(100.0).matrix();
        let near = m.project_point3(glam::Vec3::new(0.0, 0.0, -1.0));
        let far = m.project_point3(glam::Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_infinite_far_plane() {
        let m = perspective(f32::INFINITY).matrix();
        assert_eq!(m.z_axis.z, -1.0);
        assert_eq!(m.w_axis.z, -1.0);
    }
}
