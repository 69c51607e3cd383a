use crate::utils::formatting::format_minutes;
use serde::Serialize;

/// Per-person worktime totals against the expected hours.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WorktimeSummary {
    pub name: String,
    pub expected_minutes: i64,
    pub actual_minutes: i64,
    pub diff_minutes: i64,
}

impl WorktimeSummary {
    pub fn new(name: &str, expected_minutes: i64, actual_minutes: i64) -> Self {
        Self {
            name: name.to_string(),
            expected_minutes,
            actual_minutes,
            diff_minutes: actual_minutes - expected_minutes,
        }
    }

    /// `[name, expected, actual, diff]` as display strings.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_minutes(self.expected_minutes, false),
            format_minutes(self.actual_minutes, false),
            format_minutes(self.diff_minutes, true),
        ]
    }
}
