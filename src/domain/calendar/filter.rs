//! Selecting the session records that fall inside the visible window.

use chrono::{Datelike, NaiveDate};

use super::{compute_range, ViewMode};
use crate::domain::session::SessionRecord;

/// Returns the records visible for `reference` in `mode`, in input order.
///
/// Day and week views use a date-range check. Month view matches on
/// `(month, year)` equality with the reference date instead. Records whose
/// date does not parse never match.
pub fn filter_sessions<'a>(
    records: &'a [SessionRecord],
    reference: NaiveDate,
    mode: ViewMode,
) -> Vec<&'a SessionRecord> {
    let predicate = DatePredicate::new(reference, mode);
    records
        .iter()
        .filter(|record| record.calendar_date().is_some_and(|d| predicate.matches(d)))
        .collect()
}

/// Membership test for a single date, precomputed for one reference/mode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    /// Inclusive `[start, end]` range.
    Between(NaiveDate, NaiveDate),
    /// Same calendar month and year.
    SameMonth { year: i32, month: u32 },
}

impl DatePredicate {
    /// Builds the predicate used by `mode`.
    pub fn new(reference: NaiveDate, mode: ViewMode) -> Self {
        match mode {
            ViewMode::Day | ViewMode::Week => {
                let range = compute_range(reference, mode);
                DatePredicate::Between(range.start, range.end)
            }
            ViewMode::Month => DatePredicate::SameMonth {
                year: reference.year(),
                month: reference.month(),
            },
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DatePredicate::Between(start, end) => start <= date && date <= end,
            DatePredicate::SameMonth { year, month } => {
                date.year() == year && date.month() == month
            }
        }
    }
}
