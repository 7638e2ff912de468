//! Session source port (read side).
//!
//! The calendar consumes the full record list once and filters it locally,
//! so the port exposes no pagination or query parameters.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::session::SessionRecord;

/// Supplies the list of scheduled sessions.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Fetch every session record.
    async fn list_sessions(&self) -> Result<Vec<SessionRecord>, ApiError>;
}
