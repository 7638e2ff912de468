//! Six-week grid rendered by the month view.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use super::range::{first_of_month, start_of_week};
use crate::domain::session::SessionRecord;

/// Number of cells in a month grid (6 weeks x 7 days).
pub const GRID_CELLS: usize = 42;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell<'a> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    /// Records dated on this day, in input order.
    pub sessions: Vec<&'a SessionRecord>,
}

/// Month grid for the month containing a reference date.
///
/// Always 42 cells, starting on the Sunday on or before the first of the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Builds the grid for `reference`'s month over `records`.
    pub fn build(reference: NaiveDate, records: &'a [SessionRecord]) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<&'a SessionRecord>> = HashMap::new();
        for record in records {
            if let Some(date) = record.calendar_date() {
                by_date.entry(date).or_default().push(record);
            }
        }

        let first = first_of_month(reference);
        let grid_start = start_of_week(first);

        let cells = (0..GRID_CELLS as u64)
            .filter_map(|offset| grid_start.checked_add_days(Days::new(offset)))
            .map(|date| GridCell {
                date,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
                sessions: by_date.get(&date).cloned().unwrap_or_default(),
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            cells,
        }
    }

    /// The grid split into weeks, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Cells belonging to the displayed month.
    pub fn current_month_cells(&self) -> impl Iterator<Item = &GridCell<'a>> {
        self.cells.iter().filter(|cell| cell.is_current_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_2025_grid_layout() {
        let grid = MonthGrid::build(ymd(2025, 1, 15), &[]);

        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(grid.cells[0].date, ymd(2024, 12, 29));
        assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun);
        assert!(!grid.cells[0].is_current_month);
        assert_eq!(grid.current_month_cells().count(), 31);
        assert_eq!(grid.cells[41].date, ymd(2025, 2, 8));
    }

    #[test]
    fn every_january_day_is_marked_current() {
        let grid = MonthGrid::build(ymd(2025, 1, 1), &[]);
        for day in 1..=31 {
            let cell = grid
                .cells
                .iter()
                .find(|c| c.date == ymd(2025, 1, day))
                .unwrap();
            assert!(cell.is_current_month);
        }
    }

    #[test]
    fn month_starting_on_sunday_begins_grid_on_the_first() {
        // June 2025 starts on a Sunday
        let grid = MonthGrid::build(ymd(2025, 6, 20), &[]);
        assert_eq!(grid.cells[0].date, ymd(2025, 6, 1));
        assert!(grid.cells[0].is_current_month);
    }

    #[test]
    fn cells_carry_sessions_for_their_date_in_input_order() {
        let records = vec![
            SessionRecord::new("b", "2025-01-15"),
            SessionRecord::new("x", "2025-01-16"),
            SessionRecord::new("a", "2025-01-15"),
            SessionRecord::new("spill", "2024-12-30"),
            SessionRecord::new("bad", "not a date"),
        ];
        let grid = MonthGrid::build(ymd(2025, 1, 15), &records);

        let jan15 = grid.cells.iter().find(|c| c.date == ymd(2025, 1, 15)).unwrap();
        let ids: Vec<&str> = jan15.sessions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        assert_eq!(grid.cells[1].date, ymd(2024, 12, 30));
        assert_eq!(grid.cells[1].sessions.len(), 1);

        let total: usize = grid.cells.iter().map(|c| c.sessions.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn weeks_are_six_rows_of_seven() {
        let grid = MonthGrid::build(ymd(2025, 2, 1), &[]);
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == DAYS_PER_WEEK));
        assert!(weeks.iter().all(|w| w[0].date.weekday() == Weekday::Sun));
    }
}
