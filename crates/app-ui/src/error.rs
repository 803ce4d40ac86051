//! Configuration errors for the resolution engine
//!
//! These are static, discoverable-at-build-time defects. They surface at
//! construction or startup, never at resolution time.

/// Configuration errors raised while building resolution primitives
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A reference design dimension was zero, negative, or non-finite
    #[error("reference {name} must be positive and finite, got {value}")]
    InvalidReference {
        /// Which dimension was rejected
        name: &'static str,
        /// The offending value
        value: f32,
    },

    /// A responsive value map was built without its mandatory default entry
    #[error("responsive value map is missing the mandatory `default` entry")]
    MissingDefault,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
