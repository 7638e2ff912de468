//! Classification enums carried by every session record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session is delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    #[default]
    Virtual,
    InPerson,
    Hybrid,
}

impl SessionType {
    /// All delivery types, in display order.
    pub const ALL: [SessionType; 3] = [
        SessionType::Virtual,
        SessionType::InPerson,
        SessionType::Hybrid,
    ];

    /// Returns true if attendees join over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, SessionType::Virtual | SessionType::Hybrid)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionType::Virtual => "virtual",
            SessionType::InPerson => "in-person",
            SessionType::Hybrid => "hybrid",
        };
        write!(f, "{}", s)
    }
}

/// Booking status of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Confirmed,
    Waitlist,
    Cancelled,
}

impl SessionStatus {
    /// All statuses, in display order.
    pub const ALL: [SessionStatus; 3] = [
        SessionStatus::Confirmed,
        SessionStatus::Waitlist,
        SessionStatus::Cancelled,
    ];

    /// Label of the call-to-action shown next to the session.
    pub fn join_action(&self) -> &'static str {
        match self {
            SessionStatus::Waitlist => "Join Waitlist",
            _ => "Join Session",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Confirmed => "confirmed",
            SessionStatus::Waitlist => "waitlist",
            SessionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Target audience level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{}", s)
    }
}
