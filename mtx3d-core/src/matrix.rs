//! 4x4 matrix value type and the builder every other constructor goes through
//!
//! # Layout
//!
//! Entries are named `m{row}{col}` and passed to [`build_matrix`] in
//! row-major reading order, so a call reads like the matrix written on paper.
//! Matrices act on column vectors (`M * v`).
//!
//! Storage is column-major: the first four floats are column 0
//! (`m00, m10, m20, m30`), the next four column 1, and so on. This is the
//! layout of Metal's `simd_float4x4` and WGSL's `mat4x4<f32>`, so the 64 bytes
//! of a [`Matrix4x4`] can be copied into a uniform buffer as-is.
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix4, Vector4};
use std::ops::{Index, Mul};

/// An immutable 4x4 `f32` matrix.
///
/// There is no public field access; values come from [`build_matrix`], the
/// factories in [`crate::transform`], or the product of two matrices.
///
/// It does not implement `Pod`, so raw bytes cannot be cast into it. Uploads
/// go through [`Matrix4x4::columns`] or
/// [`crate::layout::Transformation::as_bytes`]:
///
/// ```compile_fail
/// let m: mtx3d_core::Matrix4x4 = bytemuck::cast([0.0f32; 16]);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4(Matrix4<f32>);

/// Build a matrix from 16 entries given row by row.
///
/// Values are stored verbatim, including `NaN` and infinities.
#[allow(clippy::too_many_arguments)]
#[inline]
#[rustfmt::skip]
pub fn build_matrix(
    m00: f32, m01: f32, m02: f32, m03: f32,
    m10: f32, m11: f32, m12: f32, m13: f32,
    m20: f32, m21: f32, m22: f32, m23: f32,
    m30: f32, m31: f32, m32: f32, m33: f32,
) -> Matrix4x4 {
    Matrix4x4(Matrix4::new(
        m00, m01, m02, m03,
        m10, m11, m12, m13,
        m20, m21, m22, m23,
        m30, m31, m32, m33,
    ))
}

impl Matrix4x4 {
    #[rustfmt::skip]
    pub fn identity() -> Self {
        build_matrix(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Entry at `row`, `col`. Panics if either index is 4 or more.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[(row, col)]
    }

    /// The four columns in storage order.
    pub fn columns(&self) -> [[f32; 4]; 4] {
        bytemuck::cast(self.0)
    }

    /// Apply the matrix to a homogeneous column vector.
    pub fn transform(&self, v: Vector4<f32>) -> Vector4<f32> {
        self.0 * v
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn as_nalgebra(&self) -> &Matrix4<f32> {
        &self.0
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.0[(row, col)]
    }
}

/// Composition: `(a * b).transform(v) == a.transform(b.transform(v))`.
impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        Matrix4x4(self.0 * rhs.0)
    }
}

impl From<Matrix4x4> for Matrix4<f32> {
    fn from(m: Matrix4x4) -> Self {
        m.0
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
