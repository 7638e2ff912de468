//! Session record as published by the session service.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Difficulty, SessionStatus, SessionType};
use crate::domain::foundation::{Percentage, SessionRecordId};

/// Wire format of the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scheduled learning session.
///
/// Records are read-only input for the calendar. The `date` is kept exactly as
/// received; [`SessionRecord::calendar_date`] parses it on demand so that a
/// malformed date only excludes that record from every range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub id: SessionRecordId,

    /// ISO calendar date (`YYYY-MM-DD`), possibly followed by a time part.
    /// Non-string values decode as empty and match no range.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub instructor: String,

    /// Display string such as `"09:00 - 11:00"`.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub time: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub timezone: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub location: String,

    #[serde(default, deserialize_with = "count_or_zero")]
    pub attendees: u32,

    #[serde(default, deserialize_with = "count_or_zero")]
    pub max_attendees: u32,

    #[serde(rename = "type", default)]
    pub session_type: SessionType,

    #[serde(default)]
    pub status: SessionStatus,

    #[serde(default)]
    pub difficulty: Difficulty,
}

impl SessionRecord {
    /// Creates a record with the given id and raw date, all other fields defaulted.
    pub fn new(id: impl Into<SessionRecordId>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets attendance and capacity.
    pub fn with_attendance(mut self, attendees: u32, max_attendees: u32) -> Self {
        self.attendees = attendees;
        self.max_attendees = max_attendees;
        self
    }

    /// Sets the delivery type.
    pub fn with_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    /// Sets the booking status.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    /// The date-only component of `date`, or `None` if it does not parse.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Free seats; zero when full or overbooked.
    pub fn seats_remaining(&self) -> u32 {
        self.max_attendees.saturating_sub(self.attendees)
    }

    /// Returns true when no seats remain.
    pub fn is_full(&self) -> bool {
        self.attendees >= self.max_attendees
    }

    /// Share of capacity taken.
    pub fn fill_ratio(&self) -> Percentage {
        Percentage::from_ratio(u64::from(self.attendees), u64::from(self.max_attendees))
    }
}

/// Parses the date-only component of an ISO date or datetime string.
///
/// `"2025-01-14"` and `"2025-01-14T09:00:00.000Z"` both yield Jan 14 2025.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Keeps JSON strings as-is; `null`, numbers and other values decode as empty.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Accepts counts as numbers or numeric strings; anything else decodes as zero.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.map_or(0, |c| u32::try_from(c).unwrap_or(u32::MAX)))
}
