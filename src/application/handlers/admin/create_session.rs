//! CreateSessionHandler - Command handler for scheduling new sessions.

use std::sync::Arc;

use super::error::{AdminError, CREATE_FAILED_MESSAGE};
use crate::domain::session::NewSession;
use crate::ports::{AdminGateway, TokenStore};

/// Shown after the service accepts a new session.
pub const SESSION_CREATED_MESSAGE: &str = "Session added successfully!";

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: NewSession,
    pub message: &'static str,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    gateway: Arc<dyn AdminGateway>,
    tokens: Arc<dyn TokenStore>,
}

impl CreateSessionHandler {
    pub fn new(gateway: Arc<dyn AdminGateway>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { gateway, tokens }
    }

    pub async fn handle(&self, session: NewSession) -> Result<CreateSessionResult, AdminError> {
        // 1. Validate locally
        session.validate()?;

        // 2. Require a stored token
        let token = self.tokens.load().ok_or(AdminError::NotLoggedIn)?;

        // 3. Send; a rejected token is forgotten so the next attempt asks for login
        if let Err(err) = self.gateway.create_session(&token, &session).await {
            if err.is_unauthorized() {
                self.tokens.clear();
            }
            return Err(AdminError::from_api(err, CREATE_FAILED_MESSAGE));
        }

        tracing::info!(title = %session.title, date = %session.date, "Session created");

        Ok(CreateSessionResult {
            session,
            message: SESSION_CREATED_MESSAGE,
        })
    }
}
