//! NewSession - payload for scheduling a session through the admin API.

use serde::{Deserialize, Serialize};

use super::record::parse_calendar_date;
use super::{Difficulty, SessionStatus, SessionType};
use crate::domain::foundation::ValidationError;

/// A session to be created by an administrator.
///
/// Serializes to the body expected by `POST /sessions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub date: String,
    pub title: String,
    pub instructor: String,
    pub time: String,
    pub timezone: String,
    pub location: String,
    pub attendees: u32,
    pub max_attendees: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub status: SessionStatus,
    pub difficulty: Difficulty,
}

impl NewSession {
    /// Checks that every required field is filled in and the date parses.
    ///
    /// Fields are checked in form order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("date", &self.date),
            ("title", &self.title),
            ("instructor", &self.instructor),
            ("time", &self.time),
            ("timezone", &self.timezone),
            ("location", &self.location),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        if parse_calendar_date(&self.date).is_none() {
            return Err(ValidationError::invalid_format("date", "expected YYYY-MM-DD"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> NewSession {
        NewSession {
            date: "2025-01-17".to_string(),
            title: "Frontend Performance Optimization".to_string(),
            instructor: "Dr. Emily Rodriguez".to_string(),
            time: "10:00 - 12:00".to_string(),
            timezone: "EST".to_string(),
            location: "Virtual Only".to_string(),
            attendees: 0,
            max_attendees: 40,
            ..Default::default()
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let draft = NewSession {
            title: "   ".to_string(),
            ..complete_draft()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::empty_field("title"))
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let draft = NewSession::default();
        assert_eq!(draft.validate().unwrap_err().field(), "date");
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let draft = NewSession {
            date: "17 Jan".to_string(),
            ..complete_draft()
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn serializes_to_api_body() {
        let body = serde_json::to_value(complete_draft()).unwrap();
        assert_eq!(body["maxAttendees"], 40);
        assert_eq!(body["type"], "virtual");
        assert_eq!(body["status"], "confirmed");
        assert_eq!(body["difficulty"], "Beginner");
    }
}
