//! LoadSessionsHandler - Fire-once fetch of the session list.
//!
//! A failed fetch is not an error for the caller: the calendar keeps working
//! over an empty list and shows a generic indicator instead.

use std::sync::Arc;

use crate::domain::session::SessionRecord;
use crate::ports::SessionSource;

/// Indicator shown when the session list could not be fetched.
pub const LOAD_FAILURE_INDICATOR: &str = "Unable to load sessions";

/// Outcome of the initial session fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLoad {
    Loaded(Vec<SessionRecord>),
    /// Fetch failed; `reason` is for logs, not for display.
    Unavailable { reason: String },
}

impl SessionLoad {
    pub fn is_available(&self) -> bool {
        matches!(self, SessionLoad::Loaded(_))
    }

    /// User-facing indicator, present only when loading failed.
    pub fn indicator(&self) -> Option<&'static str> {
        match self {
            SessionLoad::Loaded(_) => None,
            SessionLoad::Unavailable { .. } => Some(LOAD_FAILURE_INDICATOR),
        }
    }

    /// Records to display; empty when loading failed.
    pub fn into_records(self) -> Vec<SessionRecord> {
        match self {
            SessionLoad::Loaded(records) => records,
            SessionLoad::Unavailable { .. } => Vec::new(),
        }
    }
}

/// Handler for the initial session fetch.
pub struct LoadSessionsHandler {
    source: Arc<dyn SessionSource>,
}

impl LoadSessionsHandler {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self { source }
    }

    /// Fetches once. No retry.
    pub async fn handle(&self) -> SessionLoad {
        match self.source.list_sessions().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Sessions loaded");
                SessionLoad::Loaded(records)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load sessions");
                SessionLoad::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}
