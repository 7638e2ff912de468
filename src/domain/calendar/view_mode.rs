//! ViewMode and navigation direction for the session calendar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the visible calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewMode {
    /// All view modes, in toggle order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        };
        write!(f, "{}", s)
    }
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_week() {
        assert_eq!(ViewMode::default(), ViewMode::Week);
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(serde_json::to_string(&ViewMode::Month).unwrap(), "\"month\"");
        let mode: ViewMode = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(mode, ViewMode::Day);
    }

    #[test]
    fn display_matches_wire_format() {
        for mode in ViewMode::ALL {
            assert_eq!(
                serde_json::to_string(&mode).unwrap(),
                format!("\"{}\"", mode)
            );
        }
    }
}
