use super::action::AttendanceAction;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of a person's ledger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub name: String,              // ⇔ events.name   (姓名)
    pub action: AttendanceAction,  // ⇔ events.action (動作: 簽到 | 簽退)
    pub date: NaiveDate,           // ⇔ events.date   (日期, "YYYY-MM-DD")
    pub timestamp: NaiveDateTime,  // ⇔ events.time   (時間, "YYYY-MM-DD HH:MM:SS")
}

impl AttendanceEvent {
    /// Build an event for `name`; the calendar day is taken from the timestamp
    /// and sub-second precision is dropped.
    pub fn new(name: &str, action: AttendanceAction, timestamp: NaiveDateTime) -> Self {
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);
        Self {
            name: name.to_string(),
            action,
            date: timestamp.date(),
            timestamp,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Exact field match used by targeted deletion.
    pub fn matches(&self, name: &str, action: AttendanceAction, timestamp: NaiveDateTime) -> bool {
        self.name == name
            && self.action == action
            && self.date == timestamp.date()
            && self.timestamp == timestamp
    }
}
