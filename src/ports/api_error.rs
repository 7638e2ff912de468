//! Errors reported by the session service ports.

use thiserror::Error;

/// Failure talking to the session service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Service answered with a non-2xx status.
    #[error(
        "request rejected with status {status}: {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, if one was sent.
        message: Option<String>,
    },

    /// Request did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        ApiError::Rejected { status, message }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ApiError::Parse(message.into())
    }

    /// The message supplied by the server, for rejections that carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Returns true for 401/403 rejections.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 403, .. })
    }
}
