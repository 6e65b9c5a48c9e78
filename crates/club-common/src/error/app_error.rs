//! Application error types
//!
//! Startup failures and the wire shape of error bodies.

use club_core::DomainError;
use serde::Serialize;

/// Message returned to callers for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors raised while configuring and running the server
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// HTTP status code for a domain error
///
/// Conflicts map to 400: the caller must remove the dependent rows first.
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() || err.is_conflict() {
        400
    } else {
        500
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Generic body for 5xx responses; the real cause stays in the logs
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
