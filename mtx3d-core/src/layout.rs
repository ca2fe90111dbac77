//! Vertex and transform layouts shared with the GPU
//!
//! Both structs follow the `simd_float4`/`simd_float4x4` rules of the shader
//! side: 16-byte alignment, and a stride rounded up to a multiple of 16.
use bytemuck::{Pod, Zeroable};
use std::mem::{align_of, offset_of, size_of};

use crate::matrix::Matrix4x4;

/// Two-component `f32` vector, used for texture coordinates
pub type Vector2 = nalgebra::Vector2<f32>;

/// Four-component `f32` vector, used for homogeneous positions
pub type Vector4 = nalgebra::Vector4<f32>;

/// Per-vertex input: homogeneous position followed by texture coordinate
///
/// 32 bytes: position at 0, texture coordinate at 16, then 8 bytes of
/// explicit padding matching the tail of a `{ float4; float2; }` shader struct.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    pub position: Vector4,
    pub texture_coordinate: Vector2,
    _padding: [f32; 2],
}

// Safety: repr(C) with only f32 storage; the tail is an explicit field, so
// there are no implicit padding bytes
unsafe impl Zeroable for VertexData {}
unsafe impl Pod for VertexData {}

impl VertexData {
    pub fn new(position: [f32; 4], texture_coordinate: [f32; 2]) -> Self {
        Self {
            position: Vector4::from(position),
            texture_coordinate: Vector2::from(texture_coordinate),
            _padding: [0.0; 2],
        }
    }
}

/// Model, view and perspective matrices for one draw, in that order
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    pub model_matrix: Matrix4x4,
    pub view_matrix: Matrix4x4,
    pub perspective_matrix: Matrix4x4,
}

// Safety: repr(C), three 64-byte column-major f32 matrices, 192 bytes total
// with no padding at 16-byte alignment
unsafe impl Zeroable for Transformation {}
unsafe impl Pod for Transformation {}

impl Transformation {
    pub fn new(model: Matrix4x4, view: Matrix4x4, perspective: Matrix4x4) -> Self {
        Self {
            model_matrix: model,
            view_matrix: view,
            perspective_matrix: perspective,
        }
    }

    /// Combined model-view-projection matrix
    pub fn mvp(&self) -> Matrix4x4 {
        self.perspective_matrix * self.view_matrix * self.model_matrix
    }

    /// Raw bytes for a uniform buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new(
            Matrix4x4::identity(),
            Matrix4x4::identity(),
            Matrix4x4::identity(),
        )
    }
}

const _: () = {
    assert!(size_of::<Matrix4x4>() == 64);
    assert!(size_of::<VertexData>() == 32);
    assert!(align_of::<VertexData>() == 16);
    assert!(offset_of!(VertexData, position) == 0);
    assert!(offset_of!(VertexData, texture_coordinate) == 16);
    assert!(offset_of!(VertexData, _padding) == 24);
    assert!(size_of::<Transformation>() == 192);
    assert!(align_of::<Transformation>() == 16);
    assert!(offset_of!(Transformation, model_matrix) == 0);
    assert!(offset_of!(Transformation, view_matrix) == 64);
    assert!(offset_of!(Transformation, perspective_matrix) == 128);
};
