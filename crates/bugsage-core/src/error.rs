//! Centralized error types for Bugsage.

use thiserror::Error;

/// Main error type for Bugsage operations.
#[derive(Error, Debug)]
pub enum BugsageError {
    #[error("No error log found. Pass text as an argument, pipe it on stdin, or copy it to the clipboard.")]
    EmptyReport,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Bugsage operations.
pub type BugsageResult<T> = Result<T, BugsageError>;

impl BugsageError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Failure of a single outbound provider call.
///
/// Provider failures are never fatal; the analyzer absorbs them into a
/// degraded result. The variants exist so logs and tests can tell a dead
/// network apart from a provider that returned garbage.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
