//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod admin;
pub mod calendar;
pub mod session;

pub use admin::{
    AdminError, AdminLoginHandler, CreateSessionHandler, CreateSessionResult, CREATE_FAILED_MESSAGE,
    LOGIN_FAILED_MESSAGE, SERVER_ERROR_MESSAGE, SESSION_CREATED_MESSAGE,
};
pub use calendar::CalendarController;
pub use session::{LoadSessionsHandler, SessionLoad, LOAD_FAILURE_INDICATOR};
