//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionSource` - Read-only list of session records
//! - `AdminGateway` - Admin login and session scheduling
//! - `TokenStore` - Storage for the admin bearer token
//! - `Clock` - Current calendar date

mod admin_gateway;
mod api_error;
mod clock;
mod session_source;
mod token_store;

pub use admin_gateway::{AdminGateway, AuthToken, LoginCredentials};
pub use api_error::ApiError;
pub use clock::Clock;
pub use session_source::SessionSource;
pub use token_store::TokenStore;
