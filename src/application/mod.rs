//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Calendar
    CalendarController,
    // Session list
    LoadSessionsHandler, SessionLoad, LOAD_FAILURE_INDICATOR,
    // Admin
    AdminError, AdminLoginHandler, CreateSessionHandler,
};
