use super::event::TIMESTAMP_FORMAT;
use crate::utils::formatting::format_minutes;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A reconciled clock-in → clock-out pair. Derived, never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DutySession {
    pub name: String,
    pub clock_in: NaiveDateTime,
    pub clock_out: NaiveDateTime,
    pub duration_minutes: i64,
}

impl DutySession {
    pub fn clock_in_str(&self) -> String {
        self.clock_in.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Duration rendered as `HH:MM`.
    pub fn duration_str(&self) -> String {
        format_minutes(self.duration_minutes, false)
    }
}
