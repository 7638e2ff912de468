//! CalendarController - stateful front for the calendar view.
//!
//! Owns the current [`ViewState`] and the record list fetched from the
//! session service. All derived views (range, label, visible sessions, month
//! grid, statistics) are recomputed from that state on demand.

use std::sync::Arc;

use crate::domain::calendar::{
    filter_sessions, CalendarRange, Direction, MonthGrid, ViewMode, ViewState,
};
use crate::domain::session::{SessionRecord, SessionStats};
use crate::ports::Clock;

/// Calendar view over a fixed set of session records.
pub struct CalendarController {
    state: ViewState,
    records: Vec<SessionRecord>,
    clock: Arc<dyn Clock>,
}

impl CalendarController {
    /// Starts on the clock's "today" in week view with no records.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let state = ViewState::new(clock.today(), ViewMode::Week);
        Self::with_state(state, clock)
    }

    /// Starts from an explicit view state.
    pub fn with_state(state: ViewState, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            records: Vec::new(),
            clock,
        }
    }

    /// Replaces the record list (e.g. after the initial fetch).
    pub fn replace_records(&mut self, records: Vec<SessionRecord>) {
        tracing::debug!(count = records.len(), "Calendar records replaced");
        self.records = records;
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The visible range and its label.
    pub fn range(&self) -> CalendarRange {
        self.state.range()
    }

    /// Records inside the visible range, in fetch order.
    pub fn visible_sessions(&self) -> Vec<&SessionRecord> {
        filter_sessions(
            &self.records,
            self.state.reference_date,
            self.state.view_mode,
        )
    }

    /// Statistics over the visible records.
    pub fn visible_stats(&self) -> SessionStats {
        SessionStats::from_records(self.visible_sessions())
    }

    /// Month grid for the reference date's month.
    pub fn month_grid(&self) -> MonthGrid<'_> {
        MonthGrid::build(self.state.reference_date, &self.records)
    }

    /// Steps backward or forward by the current view's unit.
    pub fn navigate(&mut self, direction: Direction) -> ViewState {
        self.state = self.state.navigate(direction);
        tracing::debug!(
            ?direction,
            reference_date = %self.state.reference_date,
            "Calendar navigated"
        );
        self.state
    }

    /// Switches view mode without moving the reference date.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> ViewState {
        self.state = self.state.with_view_mode(mode);
        tracing::debug!(view_mode = %mode, "Calendar view mode changed");
        self.state
    }

    /// Moves the reference date back to the clock's "today".
    pub fn reset_to_today(&mut self) -> ViewState {
        self.state = self.state.reset_to(self.clock.today());
        self.state
    }
}
