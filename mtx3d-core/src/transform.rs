//! Translation, rotation and projection matrices
//!
//! None of these validate their input. Out-of-range arguments produce skewed
//! or non-finite matrices instead of errors; see [`crate::checked`] for
//! validating variants.
use crate::matrix::{build_matrix, Matrix4x4};

/// Create a translation matrix
///
/// Maps the homogeneous point `(x, y, z, 1)` to `(x + tx, y + ty, z + tz, 1)`.
#[inline]
#[rustfmt::skip]
pub fn translation(tx: f32, ty: f32, tz: f32) -> Matrix4x4 {
    build_matrix(
        1.0, 0.0, 0.0, tx,
        0.0, 1.0, 0.0, ty,
        0.0, 0.0, 1.0, tz,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a rotation of `angle` radians about the axis `(x, y, z)`
///
/// Counter-clockwise when looking down the axis towards the origin. The axis
/// must already be unit length; it is not normalized here.
#[inline]
#[rustfmt::skip]
pub fn rotation(angle: f32, x: f32, y: f32, z: f32) -> Matrix4x4 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    build_matrix(
        x * x * t + c,     x * y * t - z * s, x * z * t + y * s, 0.0,
        x * y * t + z * s, y * y * t + c,     y * z * t - x * s, 0.0,
        x * z * t - y * s, y * z * t + x * s, z * z * t + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

/// Create a right-handed perspective projection
///
/// The camera looks down -Z. View-space depth `-near..-far` lands in clip
/// depth `0..1` after the perspective divide.
#[inline]
#[rustfmt::skip]
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4x4 {
    let y_scale = 1.0 / (fov_y * 0.5).tan();
    let x_scale = y_scale / aspect;
    let z_range = far / (near - far);

    build_matrix(
        x_scale, 0.0,     0.0,     0.0,
        0.0,     y_scale, 0.0,     0.0,
        0.0,     0.0,     z_range, near * z_range,
        0.0,     0.0,     -1.0,    0.0,
    )
}
