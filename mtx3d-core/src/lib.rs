//! mtx3d Core Library - Matrix construction and GPU data layouts
//!
//! This library provides the stateless math used to place geometry on screen:
//! a 4x4 matrix builder, translation/rotation/perspective factories, and the
//! vertex and transform structs shared byte-for-byte with shaders.

pub mod checked;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod transform;

// Re-export commonly used types
pub use config::FrameConfig;
pub use constants::{PI, PI_2, TO_DEG, TO_RAD};
pub use error::{ConfigError, MathError};
pub use layout::{Transformation, Vector2, Vector4, VertexData};
pub use matrix::{build_matrix, Matrix4x4};
pub use transform::{perspective, rotation, translation};
