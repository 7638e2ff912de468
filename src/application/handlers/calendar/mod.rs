//! Calendar view orchestration.

mod controller;

pub use controller::CalendarController;
