//! Error types for manifest loading.

use thiserror::Error;

/// Error type for manifest loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error (includes unparseable colors)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Manifest file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value parsed but is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted field path
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
