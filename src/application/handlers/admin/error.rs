//! Errors surfaced by the admin handlers.
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::ApiError;

/// Fallback shown when a login rejection carries no message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Fallback shown when a session creation rejection carries no message.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add session";

/// Shown when the service could not be reached at all.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum AdminError {
    /// Input failed local validation; nothing was sent.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// No admin token is stored.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Transport failure or unreadable answer.
    #[error("Server error")]
    Unreachable(#[source] ApiError),
}

impl AdminError {
    /// Converts an API error, using `fallback` when a rejection has no message.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Rejected { status, .. } => AdminError::Rejected {
                status,
                message: err.server_message().unwrap_or(fallback).to_string(),
            },
            other => AdminError::Unreachable(other),
        }
    }

    /// Text to display to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
