//! Admin gateway port for login and session scheduling.
//!
//! # Contract
//!
//! - `login` returns the bearer token issued by the service, or
//!   `ApiError::Rejected` carrying the service's message.
//! - `create_session` sends the draft with the bearer token and succeeds on
//!   any 2xx answer.
//! - Neither call is retried.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use std::fmt;

use super::ApiError;
use crate::domain::session::NewSession;

/// Opaque bearer token issued on login.
pub struct AuthToken(Secret<String>);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token (for the Authorization header).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Username and password submitted by an administrator.
pub struct LoginCredentials {
    pub username: String,
    password: Secret<String>,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Exposes the password (for the login request body).
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Authenticated operations on the session service.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthToken, ApiError>;

    /// Schedule a new session.
    async fn create_session(&self, token: &AuthToken, session: &NewSession)
        -> Result<(), ApiError>;
}
