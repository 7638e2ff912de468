//! Admin handlers: login and session scheduling.

mod create_session;
mod error;
mod login;

pub use create_session::{CreateSessionHandler, CreateSessionResult, SESSION_CREATED_MESSAGE};
pub use error::{
    AdminError, CREATE_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE, SERVER_ERROR_MESSAGE,
};
pub use login::AdminLoginHandler;
