//! Validating variants of the transform factories
//!
//! Each function checks the preconditions its unchecked counterpart in
//! [`crate::transform`] leaves to the caller, then delegates to it. Use these
//! where input comes from outside the program (config files, user input);
//! keep the unchecked factories in per-frame code.
use log::debug;

use crate::constants::PI;
use crate::error::MathError;
use crate::matrix::Matrix4x4;
use crate::transform::{perspective, rotation, translation};

/// Largest accepted deviation of a rotation axis length from 1
pub const AXIS_TOLERANCE: f32 = 1e-4;

fn finite(name: &'static str, value: f32) -> Result<f32, MathError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("rejecting non-finite {name}: {value}");
        Err(MathError::NonFinite { name, value })
    }
}

/// [`translation`] with finite offsets
pub fn checked_translation(tx: f32, ty: f32, tz: f32) -> Result<Matrix4x4, MathError> {
    Ok(translation(
        finite("tx", tx)?,
        finite("ty", ty)?,
        finite("tz", tz)?,
    ))
}

/// [`rotation`] with a finite angle and a unit axis
pub fn checked_rotation(angle: f32, x: f32, y: f32, z: f32) -> Result<Matrix4x4, MathError> {
    let angle = finite("angle", angle)?;
    let (x, y, z) = (finite("x", x)?, finite("y", y)?, finite("z", z)?);

    let length = (x * x + y * y + z * z).sqrt();
    if (length - 1.0).abs() > AXIS_TOLERANCE {
        debug!("rejecting rotation axis ({x}, {y}, {z}) with length {length}");
        return Err(MathError::NonUnitAxis { length });
    }

    Ok(rotation(angle, x, y, z))
}

/// [`perspective`] with `0 < fov_y < π`, `aspect != 0` and `near != far`
pub fn checked_perspective(
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Matrix4x4, MathError> {
    let fov_y = finite("fov_y", fov_y)?;
    let aspect = finite("aspect", aspect)?;
    let near = finite("near", near)?;
    let far = finite("far", far)?;

    if fov_y <= 0.0 || fov_y >= PI {
        debug!("rejecting field of view {fov_y}");
        return Err(MathError::FieldOfView { fov_y });
    }
    if aspect == 0.0 {
        debug!("rejecting zero aspect ratio");
        return Err(MathError::Aspect);
    }
    if near == far {
        debug!("rejecting collapsed depth range at {near}");
        return Err(MathError::DepthRange { near });
    }

    Ok(perspective(fov_y, aspect, near, far))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_matches_unchecked() {
        assert_eq!(
            checked_translation(1.0, 2.0, 3.0),
            Ok(translation(1.0, 2.0, 3.0))
        );
        assert_eq!(
            checked_rotation(0.7, 0.0, 1.0, 0.0),
            Ok(rotation(0.7, 0.0, 1.0, 0.0))
        );
        assert_eq!(
            checked_perspective(PI / 3.0, 1.5, 0.1, 100.0),
            Ok(perspective(PI / 3.0, 1.5, 0.1, 100.0))
        );
    }

    #[test]
    fn test_non_finite_arguments() {
        assert_eq!(
            checked_translation(0.0, f32::INFINITY, 0.0),
            Err(MathError::NonFinite { name: "ty", value: f32::INFINITY })
        );
        assert!(matches!(
            checked_rotation(f32::NAN, 1.0, 0.0, 0.0),
            Err(MathError::NonFinite { name: "angle", .. })
        ));
        assert!(matches!(
            checked_perspective(1.0, 1.0, 0.1, f32::NEG_INFINITY),
            Err(MathError::NonFinite { name: "far", .. })
        ));
    }

    #[test]
    fn test_rotation_axis_length() {
        assert_eq!(
            checked_rotation(1.0, 0.0, 0.0, 2.0),
            Err(MathError::NonUnitAxis { length: 2.0 })
        );
        assert!(matches!(
            checked_rotation(1.0, 0.0, 0.0, 0.0),
            Err(MathError::NonUnitAxis { .. })
        ));

        let n = 1.0 / 3.0f32.sqrt();
        assert!(checked_rotation(1.0, n, n, n).is_ok());
    }

    #[test]
    fn test_perspective_preconditions() {
        assert_eq!(
            checked_perspective(0.0, 1.0, 0.1, 100.0),
            Err(MathError::FieldOfView { fov_y: 0.0 })
        );
        assert_eq!(
            checked_perspective(PI, 1.0, 0.1, 100.0),
            Err(MathError::FieldOfView { fov_y: PI })
        );
        assert_eq!(
            checked_perspective(1.0, 0.0, 0.1, 100.0),
            Err(MathError::Aspect)
        );
        assert_eq!(
            checked_perspective(1.0, 1.0, 5.0, 5.0),
            Err(MathError::DepthRange { near: 5.0 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MathError::NonUnitAxis { length: 2.0 }.to_string(),
            "rotation axis must be unit length, got length 2"
        );
        assert_eq!(MathError::Aspect.to_string(), "aspect ratio must be non-zero");
    }
}
