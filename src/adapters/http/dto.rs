//! Wire types for the session service endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful `POST /login` answer.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body sent with non-2xx answers.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extracts `message` from a raw body; non-JSON bodies yield `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
    }
}
