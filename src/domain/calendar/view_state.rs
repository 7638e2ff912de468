//! ViewState - the reference date and view mode the calendar is showing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{compute_range, step, CalendarRange, Direction, ViewMode};

/// Year, month and day of the anchor used before any clock is consulted.
pub const DEFAULT_ANCHOR_YMD: (i32, u32, u32) = (2025, 1, 15);

/// The fixed "today" used by the calendar when no clock overrides it.
pub fn default_anchor() -> NaiveDate {
    let (y, m, d) = DEFAULT_ANCHOR_YMD;
    NaiveDate::from_ymd_opt(y, m, d).expect("default anchor is a valid calendar date")
}

/// Calendar view state.
///
/// Transitions return a new state; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
}

impl ViewState {
    pub fn new(reference_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            reference_date,
            view_mode,
        }
    }

    /// Steps the reference date by one day, week or month; mode is unchanged.
    pub fn navigate(self, direction: Direction) -> Self {
        Self {
            reference_date: step(self.reference_date, self.view_mode, direction),
            ..self
        }
    }

    /// Switches the view mode, keeping the reference date.
    pub fn with_view_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    /// Moves the reference date to `today`, keeping the view mode.
    pub fn reset_to(self, today: NaiveDate) -> Self {
        Self {
            reference_date: today,
            ..self
        }
    }

    /// The range currently visible.
    pub fn range(&self) -> CalendarRange {
        compute_range(self.reference_date, self.view_mode)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(default_anchor(), ViewMode::Week)
    }
}
