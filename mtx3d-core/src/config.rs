//! Frame configuration
//!
//! A [`FrameConfig`] describes one model/view/projection chain in TOML:
//!
//! ```toml
//! [model]
//! translation = [0.0, 0.5, 0.0]
//! rotation = { angle_degrees = 30.0, axis = [0.0, 1.0, 0.0] }
//!
//! [view]
//! eye = [0.0, 0.0, 5.0]
//!
//! [projection]
//! fov_y_degrees = 45.0
//! aspect = 1.7777778
//! near = 0.1
//! far = 100.0
//! ```
//!
//! Every section and field is optional and falls back to the defaults below.
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::checked::{checked_perspective, checked_rotation, checked_translation};
use crate::constants::to_radians;
use crate::error::{ConfigError, MathError};
use crate::layout::Transformation;
use crate::matrix::Matrix4x4;

/// Rotation about a unit axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub angle_degrees: f32,
    pub axis: [f32; 3],
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            axis: [0.0, 1.0, 0.0],
        }
    }
}

/// Model placement: rotate about the origin, then translate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub translation: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationConfig>,
}

impl ModelConfig {
    pub fn matrix(&self) -> Result<Matrix4x4, MathError> {
        let [tx, ty, tz] = self.translation;
        let translate = checked_translation(tx, ty, tz)?;

        match self.rotation {
            Some(RotationConfig {
                angle_degrees,
                axis: [x, y, z],
            }) => Ok(translate * checked_rotation(to_radians(angle_degrees), x, y, z)?),
            None => Ok(translate),
        }
    }

    /// Axis used for extra animation spin: the configured rotation axis, or +Y
    pub fn spin_axis(&self) -> [f32; 3] {
        self.rotation.unwrap_or_default().axis
    }
}

/// Camera position; the camera looks down -Z with no rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub eye: [f32; 3],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
        }
    }
}

impl ViewConfig {
    pub fn matrix(&self) -> Result<Matrix4x4, MathError> {
        let [x, y, z] = self.eye;
        checked_translation(-x, -y, -z)
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    pub fn matrix(&self) -> Result<Matrix4x4, MathError> {
        checked_perspective(
            to_radians(self.fov_y_degrees),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

/// Model, view and projection settings for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub model: ModelConfig,
    pub view: ViewConfig,
    pub projection: ProjectionConfig,
}

impl FrameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading frame config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the transform chain, validating every section
    pub fn transformation(&self) -> Result<Transformation, ConfigError> {
        let invalid =
            |section: &'static str| move |source: MathError| ConfigError::Invalid { section, source };

        let model = self.model.matrix().map_err(invalid("model"))?;
        let view = self.view.matrix().map_err(invalid("view"))?;
        let perspective = self.projection.matrix().map_err(invalid("projection"))?;

        Ok(Transformation::new(model, view, perspective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use crate::transform::{perspective, rotation, translation};
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FrameConfig::from_toml_str("").unwrap();
        assert_eq!(config, FrameConfig::default());
        assert_eq!(config.view.eye, [0.0, 0.0, 5.0]);
        assert_eq!(config.projection.fov_y_degrees, 45.0);
        assert!(config.model.rotation.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = FrameConfig::from_toml_str(
            r#"
            [model]
            rotation = { angle_degrees = 90.0 }

            [projection]
            far = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.model.translation, [0.0, 0.0, 0.0]);
        assert_eq!(
            config.model.rotation,
            Some(RotationConfig {
                angle_degrees: 90.0,
                axis: [0.0, 1.0, 0.0],
            })
        );
        assert_eq!(config.projection.far, 250.0);
        assert_eq!(config.projection.near, 0.1);
    }

    #[test]
    fn test_transformation_matches_factories() {
        let config = FrameConfig::from_toml_str(
            r#"
            [model]
            translation = [1.0, 2.0, 3.0]
            rotation = { angle_degrees = 180.0, axis = [0.0, 0.0, 1.0] }

            [view]
            eye = [0.0, 1.0, 10.0]

            [projection]
            fov_y_degrees = 90.0
            aspect = 2.0
            near = 0.5
            far = 50.0
            "#,
        )
        .unwrap();

        let t = config.transformation().unwrap();
        assert_relative_eq!(
            t.model_matrix,
            translation(1.0, 2.0, 3.0) * rotation(PI, 0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
        assert_eq!(t.view_matrix, translation(0.0, -1.0, -10.0));
        assert_relative_eq!(
            t.perspective_matrix,
            perspective(PI / 2.0, 2.0, 0.5, 50.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_invalid_sections_are_reported() {
        let mut config = FrameConfig::default();
        config.projection.near = config.projection.far;
        let err = config.transformation().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                section: "projection",
                source: MathError::DepthRange { .. }
            }
        ));

        let mut config = FrameConfig::default();
        config.model.rotation = Some(RotationConfig {
            angle_degrees: 10.0,
            axis: [1.0, 1.0, 0.0],
        });
        let err = config.transformation().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { section: "model", .. }
        ));
        assert!(err.to_string().starts_with("Invalid model section"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = FrameConfig::from_toml_str("[projection]\nnear = \"close\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_round_trip_and_load() {
        let mut config = FrameConfig::default();
        config.model.translation = [0.0, -1.0, 0.5];
        config.model.rotation = Some(RotationConfig::default());

        let text = config.to_toml_string().unwrap();
        let path = std::env::temp_dir().join(format!("mtx3d-config-{}.toml", std::process::id()));
        std::fs::write(&path, &text).unwrap();
        let loaded = FrameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = FrameConfig::load("/nonexistent/mtx3d/frame.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_spin_axis_defaults_to_y() {
        assert_eq!(ModelConfig::default().spin_axis(), [0.0, 1.0, 0.0]);
    }
}
