//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `session` - Session records, admin drafts and range statistics
//! - `calendar` - View modes, visible ranges, filtering and the month grid

pub mod calendar;
pub mod foundation;
pub mod session;
