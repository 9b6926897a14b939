//! Error types for rule configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or checking a rules file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rules file could not be read.
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rules file is not valid TOML or does not match the schema.
    #[error("failed to parse rules file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Rules parsed but are unusable.
    #[error("invalid rules: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
