//! Aggregate statistics over a set of session records.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{SessionRecord, SessionStatus, SessionType};
use crate::domain::foundation::Percentage;

/// Summary of the sessions visible in a calendar range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_sessions: usize,
    pub total_attendees: u64,
    pub total_capacity: u64,
    pub by_type: BTreeMap<SessionType, usize>,
    pub by_status: BTreeMap<SessionStatus, usize>,
}

impl SessionStats {
    /// Tallies the given records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SessionRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.total_sessions += 1;
            stats.total_attendees += u64::from(record.attendees);
            stats.total_capacity += u64::from(record.max_attendees);
            *stats.by_type.entry(record.session_type).or_default() += 1;
            *stats.by_status.entry(record.status).or_default() += 1;
        }
        stats
    }

    /// Attendees over capacity across all sessions.
    pub fn attendance_rate(&self) -> Percentage {
        Percentage::from_ratio(self.total_attendees, self.total_capacity)
    }

    /// Number of sessions of the given delivery type.
    pub fn count_type(&self, session_type: SessionType) -> usize {
        self.by_type.get(&session_type).copied().unwrap_or(0)
    }

    /// Number of sessions with the given status.
    pub fn count_status(&self, status: SessionStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_zeroes() {
        let records: Vec<SessionRecord> = Vec::new();
        let stats = SessionStats::from_records(&records);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.attendance_rate(), Percentage::ZERO);
        assert_eq!(stats.count_type(SessionType::Hybrid), 0);
    }

    #[test]
    fn tallies_attendance_and_breakdowns() {
        let records = vec![
            SessionRecord::new("1", "2025-01-15")
                .with_attendance(24, 30)
                .with_type(SessionType::Hybrid),
            SessionRecord::new("2", "2025-01-15")
                .with_attendance(45, 50)
                .with_type(SessionType::Virtual),
            SessionRecord::new("3", "2025-01-15")
                .with_attendance(18, 20)
                .with_type(SessionType::InPerson)
                .with_status(SessionStatus::Waitlist),
        ];

        let stats = SessionStats::from_records(&records);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_attendees, 87);
        assert_eq!(stats.total_capacity, 100);
        assert_eq!(stats.attendance_rate().value(), 87);
        assert_eq!(stats.count_type(SessionType::Hybrid), 1);
        assert_eq!(stats.count_status(SessionStatus::Confirmed), 2);
        assert_eq!(stats.count_status(SessionStatus::Waitlist), 1);
        assert_eq!(stats.count_status(SessionStatus::Cancelled), 0);
    }
}
