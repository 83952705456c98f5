//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by server-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Operation cancelled during teardown
    #[error("Operation cancelled")]
    Cancelled,
}

impl ClientError {
    /// Human-readable message for the error banner.
    ///
    /// Server-originated failures carry the server's own wording; that text
    /// is surfaced verbatim, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NotFound(msg)
            | ClientError::Validation(msg)
            | ClientError::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// True for the cancellation pseudo-error (teardown path, not a failure)
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
