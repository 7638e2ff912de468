//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST client for the session service
//! - `clock` - Fixed and wall-clock date sources
//! - `token_store` - In-memory admin token storage

pub mod clock;
pub mod http;
pub mod token_store;

pub use clock::{FixedClock, SystemClock};
pub use http::{HttpApiClient, HttpApiConfig};
pub use token_store::InMemoryTokenStore;
