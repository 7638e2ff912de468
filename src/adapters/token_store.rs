//! In-memory token store.

use secrecy::{ExposeSecret, Secret};
use std::sync::RwLock;

use crate::ports::{AuthToken, TokenStore};

/// Keeps the admin token for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<Secret<String>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn save(&self, token: AuthToken) {
        let secret = Secret::new(token.expose().to_string());
        match self.token.write() {
            Ok(mut guard) => *guard = Some(secret),
            Err(poisoned) => *poisoned.into_inner() = Some(secret),
        }
    }

    fn load(&self) -> Option<AuthToken> {
        let guard = match self.token.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard
            .as_ref()
            .map(|secret| AuthToken::new(secret.expose_secret().clone()))
    }

    fn clear(&self) {
        match self.token.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
