//! Error types for the validation engine.
//!
//! Field rule failures are never errors; they become error records. These
//! variants cover setting the engine up and running it in the background.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// HTTP client for URL probing could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Background validation thread could not be started.
    #[error("failed to start validation worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// Background validation thread panicked.
    #[error("validation worker panicked")]
    WorkerPanicked,
}

/// Result type for validation engine operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
