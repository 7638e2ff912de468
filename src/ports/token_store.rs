//! Token store port - keeps the admin bearer token between requests.

use super::AuthToken;

/// Holds at most one admin token.
pub trait TokenStore: Send + Sync {
    /// Replace the stored token.
    fn save(&self, token: AuthToken);

    /// The stored token, if any.
    fn load(&self) -> Option<AuthToken>;

    /// Forget the stored token.
    fn clear(&self);
}
