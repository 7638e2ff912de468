//! Calendar configuration

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::calendar::{default_anchor, ViewMode, ViewState};

/// Calendar configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Date reported as "today" by the fixed clock
    #[serde(default = "default_anchor")]
    pub anchor_date: NaiveDate,

    /// View mode shown on start
    #[serde(default)]
    pub default_view: ViewMode,

    /// Which clock decides "today"
    #[serde(default)]
    pub clock: ClockKind,
}

/// Source of the calendar's current date
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Always `anchor_date`
    #[default]
    Fixed,
    /// Local wall-clock date
    System,
}

impl CalendarConfig {
    /// Initial view state for a given "today".
    pub fn initial_state(&self, today: NaiveDate) -> ViewState {
        ViewState::new(today, self.default_view)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            anchor_date: default_anchor(),
            default_view: ViewMode::default(),
            clock: ClockKind::default(),
        }
    }
}
