//! Error types for the validating constructors and configuration loading

/// Rejected input to one of the [`crate::checked`] constructors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// An argument was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// Rotation axis is not unit length
    #[error("rotation axis must be unit length, got length {length}")]
    NonUnitAxis { length: f32 },

    /// Vertical field of view outside (0, π)
    #[error("vertical field of view must be in (0, π) radians, got {fov_y}")]
    FieldOfView { fov_y: f32 },

    /// Aspect ratio of zero
    #[error("aspect ratio must be non-zero")]
    Aspect,

    /// Near and far planes coincide
    #[error("near and far planes must differ, both are {near}")]
    DepthRange { near: f32 },
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configured values describe an invalid transform
    #[error("Invalid {section} section: {source}")]
    Invalid {
        section: &'static str,
        #[source]
        source: MathError,
    },
}
