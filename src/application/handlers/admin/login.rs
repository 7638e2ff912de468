//! AdminLoginHandler - Exchanges admin credentials for a stored bearer token.

use std::sync::Arc;

use super::error::{AdminError, LOGIN_FAILED_MESSAGE};
use crate::domain::foundation::ValidationError;
use crate::ports::{AdminGateway, LoginCredentials, TokenStore};

/// Handler for admin login.
pub struct AdminLoginHandler {
    gateway: Arc<dyn AdminGateway>,
    tokens: Arc<dyn TokenStore>,
}

impl AdminLoginHandler {
    pub fn new(gateway: Arc<dyn AdminGateway>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { gateway, tokens }
    }

    /// Logs in and stores the issued token. Not retried.
    pub async fn handle(&self, credentials: LoginCredentials) -> Result<(), AdminError> {
        if credentials.username.trim().is_empty() {
            return Err(ValidationError::empty_field("username").into());
        }

        let token = self
            .gateway
            .login(&credentials)
            .await
            .map_err(|e| AdminError::from_api(e, LOGIN_FAILED_MESSAGE))?;

        self.tokens.save(token);
        tracing::info!(username = %credentials.username, "Admin logged in");
        Ok(())
    }
}
