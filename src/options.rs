//! Startup options with TOML support.
//!
//! Every field has a default, so a partial TOML file only overrides what it
//! names.

use serde::{Deserialize, Serialize};

use crate::{
    core::{Perspective, Placement, DEFAULT_REVOLUTION_MS},
    error::{Error, Result},
};

/// Adapter selection hint, mirrored from [`wgpu::PowerPreference`] so it can
/// be written in TOML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerHint {
    /// No preference.
    #[default]
    None,
    /// Prefer an integrated GPU.
    Low,
    /// Prefer a dedicated GPU.
    High,
}

impl From<PowerHint> for wgpu::PowerPreference {
    fn from(hint: PowerHint) -> Self {
        match hint {
            PowerHint::None => wgpu::PowerPreference::None,
            PowerHint::Low => wgpu::PowerPreference::LowPower,
            PowerHint::High => wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// Top-level options container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Vertical field of view in degrees.
    pub field_of_view_degrees: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
    /// Time for one full revolution of every solid, in milliseconds.
    pub revolution_ms: f64,
    /// RGBA clear color.
    pub clear_color: [f64; 4],
    /// Initial surface width in physical pixels.
    pub width: u32,
    /// Initial surface height in physical pixels.
    pub height: u32,
    /// Per-tick step of the bobbing motion.
    pub oscillation_step: f32,
    /// Lower and upper bound of the bobbing accumulator.
    pub oscillation_bounds: [f32; 2],
    /// Adapter selection hint.
    pub power_preference: PowerHint,
    /// The solids to draw, in draw order.
    pub objects: Vec<Placement>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            field_of_view_degrees: 45.0,
            near: 1.0,
            far: 10000.0,
            revolution_ms: DEFAULT_REVOLUTION_MS,
            clear_color: [0.1, 0.1, 0.1, 1.0],
            width: 800,
            height: 600,
            oscillation_step: 0.1,
            oscillation_bounds: [-6.0, 9.0],
            power_preference: PowerHint::None,
            objects: Placement::defaults(),
        }
    }
}

impl Options {
    /// Parses options from TOML. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Options`] if the TOML is malformed or the values fail
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(content).map_err(|e| Error::Options(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Rejects values that would produce a degenerate projection or motion.
    ///
    /// # Errors
    ///
    /// [`Error::Options`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(Error::Options(msg.to_owned())) };

        if self.near.is_nan()
            || self.far.is_nan()
            || !self.revolution_ms.is_finite()
            || !self.oscillation_step.is_finite()
            || !self.oscillation_bounds.iter().all(|bound| bound.is_finite())
        {
            return invalid("near, far, revolution_ms and oscillation values must be numbers");
        }
        if !(self.field_of_view_degrees > 0.0 && self.field_of_view_degrees < 180.0) {
            return invalid("field_of_view_degrees must be in (0, 180)");
        }
        if !(self.near > 0.0 && self.near.is_finite()) {
            return invalid("near must be positive and finite");
        }
        if self.far <= self.near {
            return invalid("far must be greater than near");
        }
        if self.revolution_ms <= 0.0 {
            return invalid("revolution_ms must be positive");
        }
        if self.width == 0 || self.height == 0 {
            return invalid("width and height must be non-zero");
        }
        if self.oscillation_bounds[0] >= self.oscillation_bounds[1] {
            return invalid("oscillation_bounds must be [lower, upper] with lower < upper");
        }

        Ok(())
    }

    /// Projection parameters for a surface of the given aspect ratio.
    pub fn perspective(&self, aspect: f32) -> Perspective {
        Perspective {
            vfov_radians: self.field_of_view_degrees.to_radians(),
            aspect,
            near: self.near,
            far: self.far,
        }
    }

    /// The clear color as a wgpu color.
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometries::Shape;

    #[test]
    fn test_defaults_are_valid() {
        let options = Options::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.objects.len(), 3);
    }

    #[test]
    fn test_partial_toml() {
        let options = Options::from_toml_str("revolution_ms = 2500.0\n").unwrap();
        assert_eq!(options.revolution_ms, 2500.0);
        assert_eq!(options.field_of_view_degrees, 45.0);
    }

    #[test]
    fn test_objects_from_toml() {
        let toml = r#"
            [[objects]]
            shape = "dodecahedron"
            translation = [0.0, 0.0, -8.0]
            rotation_axis = [1.0, 0.0, 0.0]
        "#;

        let options = Options::from_toml_str(toml).unwrap();
        assert_eq!(options.objects.len(), 1);
        assert_eq!(options.objects[0].shape, Shape::Dodecahedron);
        assert!(!options.objects[0].bob);
    }

    #[test]
    fn test_rejects_far_before_near() {
        let err = Options::from_toml_str("near = 10.0\nfar = 5.0\n").unwrap_err();
        assert!(matches!(err, Error::Options(_)));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let options = Options {
            oscillation_bounds: [9.0, -6.0],
            ..Options::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        for toml in [
            "near = nan\n",
            "far = nan\n",
            "revolution_ms = nan\n",
            "oscillation_step = nan\n",
            "revolution_ms = inf\n",
        ] {
            let err = Options::from_toml_str(toml).unwrap_err();
            assert!(matches!(err, Error::Options(_)), "{toml}");
        }
    }

    #[test]
    fn test_accepts_infinite_far_plane() {
        let options = Options::from_toml_str("far = inf\n").unwrap();
        assert!(options.far.is_infinite());
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let toml = r#"
            [[objects]]
            shape = "cube"
            translation = [0.0, 0.0, 0.0]
            rotation_axis = [0.0, 1.0, 0.0]
        "#;
        assert!(Options::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_power_hint_maps_to_wgpu() {
        let preference: wgpu::PowerPreference = PowerHint::High.into();
        assert_eq!(preference, wgpu::PowerPreference::HighPerformance);
    }
}
