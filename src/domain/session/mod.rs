//! Session module - Learning session records and their derived views.
//!
//! Records are produced by the session service and consumed read-only by the
//! calendar. `NewSession` is the admin-side payload for scheduling one.

mod classification;
mod draft;
mod record;
mod stats;

pub use classification::{Difficulty, SessionStatus, SessionType};
pub use draft::NewSession;
pub use record::{parse_calendar_date, SessionRecord, DATE_FORMAT};
pub use stats::SessionStats;
