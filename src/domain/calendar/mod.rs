//! Calendar module - Range computation, filtering and navigation.
//!
//! The calendar shows session records for a reference date in one of three
//! view modes. Day and week views filter on an inclusive date range; month
//! view filters on month/year equality. Everything here is a pure function of
//! `(records, reference date, view mode)`.

mod filter;
mod month_grid;
mod range;
mod view_mode;
mod view_state;

pub use filter::{filter_sessions, DatePredicate};
pub use month_grid::{GridCell, MonthGrid, DAYS_PER_WEEK, GRID_CELLS};
pub use range::{compute_range, first_of_month, last_of_month, start_of_week, step, CalendarRange};
pub use view_mode::{Direction, ViewMode};
pub use view_state::{default_anchor, ViewState, DEFAULT_ANCHOR_YMD};
