//! Clock adapters.

use chrono::{Local, NaiveDate};

use crate::domain::calendar::default_anchor;
use crate::ports::Clock;

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(default_anchor())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Reports the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_defaults_to_anchor() {
        assert_eq!(FixedClock::default().today(), default_anchor());
    }

    #[test]
    fn fixed_clock_reports_given_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let today = SystemClock.today();
        let utc_today = chrono::Utc::now().date_naive();
        assert!((today - utc_today).num_days().abs() <= 1);
    }
}
