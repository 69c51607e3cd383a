//! Date/time helpers: parsing operator input and reading the wall clock.
//! All values are naive local times; no timezone handling.

use crate::errors::{AppError, AppResult};
use crate::models::event::{DATE_FORMAT, TIMESTAMP_FORMAT};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Current local wall-clock time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    match input {
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(None),
    }
}

/// Last day of the given month, `None` for an invalid month.
pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
