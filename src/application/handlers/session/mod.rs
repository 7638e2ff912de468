//! Session query handlers.

mod load_sessions;

pub use load_sessions::{LoadSessionsHandler, SessionLoad, LOAD_FAILURE_INDICATOR};
