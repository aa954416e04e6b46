//! Error types for model attribute storage and configuration.
//!
//! The case adapter itself never fails; these errors come from the
//! collaborators it wraps: the in-memory attribute store and the YAML
//! configuration loader.

use thiserror::Error;

/// Errors that can occur while reading attributes or loading configuration.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A strict store was asked for an attribute it does not hold.
    #[error("attribute not found: {0}")]
    MissingAttribute(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;
