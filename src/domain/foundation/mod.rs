//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the CILC domain.

mod errors;
mod ids;
mod percentage;

pub use errors::ValidationError;
pub use ids::SessionRecordId;
pub use percentage::Percentage;
