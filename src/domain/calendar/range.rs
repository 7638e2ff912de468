//! Visible range computation and date stepping.
//!
//! All functions here are pure: the same reference date and view mode always
//! produce the same range, label and step.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use super::{Direction, ViewMode};

/// The window of dates shown by the calendar, with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl CalendarRange {
    /// Returns true if `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, inclusive of both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Computes the visible range for `reference` in `mode`.
///
/// - Day: the single reference date.
/// - Week: Sunday on/before the reference through the following Saturday.
/// - Month: first through last day of the reference month, labelled
///   `"<Month> <Year>"`. Month filtering does not use these bounds; see
///   [`super::filter_sessions`].
pub fn compute_range(reference: NaiveDate, mode: ViewMode) -> CalendarRange {
    match mode {
        ViewMode::Day => CalendarRange {
            start: reference,
            end: reference,
            label: format_long(reference),
        },
        ViewMode::Week => {
            let start = start_of_week(reference);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
            CalendarRange {
                start,
                end,
                label: format!("{} - {}", format_short(start), format_short(end)),
            }
        }
        ViewMode::Month => CalendarRange {
            start: first_of_month(reference),
            end: last_of_month(reference),
            label: reference.format("%B %Y").to_string(),
        },
    }
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Moves `date` one step in `direction`, with the step size set by `mode`.
///
/// Month steps keep the day of month where possible and clamp to the last
/// day otherwise (Jan 31 -> Feb 28). Steps past the representable range
/// leave the date unchanged.
pub fn step(date: NaiveDate, mode: ViewMode, direction: Direction) -> NaiveDate {
    let stepped = match (mode, direction) {
        (ViewMode::Day, Direction::Next) => date.checked_add_days(Days::new(1)),
        (ViewMode::Day, Direction::Prev) => date.checked_sub_days(Days::new(1)),
        (ViewMode::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
        (ViewMode::Week, Direction::Prev) => date.checked_sub_days(Days::new(7)),
        (ViewMode::Month, Direction::Next) => date.checked_add_months(Months::new(1)),
        (ViewMode::Month, Direction::Prev) => date.checked_sub_months(Months::new(1)),
    };
    stepped.unwrap_or(date)
}

/// `"Wednesday, January 15, 2025"`
fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `"Jan 12, 2025"`
fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_range_is_single_date_with_long_label() {
        let range = compute_range(ymd(2025, 1, 15), ViewMode::Day);
        assert_eq!(range.start, ymd(2025, 1, 15));
        assert_eq!(range.end, ymd(2025, 1, 15));
        assert_eq!(range.label, "Wednesday, January 15, 2025");
    }

    #[test]
    fn week_range_runs_sunday_to_saturday() {
        let range = compute_range(ymd(2025, 1, 15), ViewMode::Week);
        assert_eq!(range.start, ymd(2025, 1, 12));
        assert_eq!(range.end, ymd(2025, 1, 18));
        assert_eq!(range.start.weekday(), Weekday::Sun);
        assert_eq!(range.len_days(), 7);
        assert_eq!(range.label, "Jan 12, 2025 - Jan 18, 2025");
    }

    #[test]
    fn week_range_on_a_sunday_starts_that_day() {
        let range = compute_range(ymd(2025, 1, 12), ViewMode::Week);
        assert_eq!(range.start, ymd(2025, 1, 12));
    }

    #[test]
    fn week_range_can_span_years() {
        let range = compute_range(ymd(2025, 1, 2), ViewMode::Week);
        assert_eq!(range.start, ymd(2024, 12, 29));
        assert_eq!(range.end, ymd(2025, 1, 4));
        assert_eq!(range.label, "Dec 29, 2024 - Jan 4, 2025");
    }

    #[test]
    fn month_range_labels_month_and_year() {
        let range = compute_range(ymd(2025, 1, 15), ViewMode::Month);
        assert_eq!(range.label, "January 2025");
        assert_eq!(range.start, ymd(2025, 1, 1));
        assert_eq!(range.end, ymd(2025, 1, 31));
    }

    #[test]
    fn last_of_month_handles_leap_february() {
        assert_eq!(last_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(last_of_month(ymd(2025, 2, 10)), ymd(2025, 2, 28));
        assert_eq!(last_of_month(ymd(2024, 12, 1)), ymd(2024, 12, 31));
    }

    #[test]
    fn step_sizes_follow_mode() {
        let date = ymd(2025, 1, 15);
        assert_eq!(step(date, ViewMode::Day, Direction::Next), ymd(2025, 1, 16));
        assert_eq!(step(date, ViewMode::Day, Direction::Prev), ymd(2025, 1, 14));
        assert_eq!(step(date, ViewMode::Week, Direction::Next), ymd(2025, 1, 22));
        assert_eq!(step(date, ViewMode::Week, Direction::Prev), ymd(2025, 1, 8));
        assert_eq!(step(date, ViewMode::Month, Direction::Next), ymd(2025, 2, 15));
        assert_eq!(step(date, ViewMode::Month, Direction::Prev), ymd(2024, 12, 15));
    }

    #[test]
    fn month_step_rolls_over_year_boundary() {
        assert_eq!(
            step(ymd(2024, 12, 15), ViewMode::Month, Direction::Next),
            ymd(2025, 1, 15)
        );
    }

    #[test]
    fn month_step_clamps_to_month_end() {
        assert_eq!(
            step(ymd(2025, 1, 31), ViewMode::Month, Direction::Next),
            ymd(2025, 2, 28)
        );
        assert_eq!(
            step(ymd(2024, 3, 31), ViewMode::Month, Direction::Prev),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let range = compute_range(ymd(2025, 1, 15), ViewMode::Week);
        assert!(range.contains(ymd(2025, 1, 12)));
        assert!(range.contains(ymd(2025, 1, 18)));
        assert!(!range.contains(ymd(2025, 1, 19)));
    }
}
