//! Calendar-day window used to select duty sessions.

use crate::errors::{AppError, AppResult};
use crate::models::session::DutySession;
use chrono::NaiveDate;
use std::fmt;

/// Inclusive `[start, end]` window; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Fails with `InvalidRange` when both bounds are given and `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(AppError::InvalidRange { start: s, end: e });
        }
        Ok(Self { start, end })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }

    /// A session counts when its clock-in day OR its clock-out day falls in
    /// the window; it then counts in full, even if it sticks out.
    pub fn includes(&self, session: &DutySession) -> bool {
        self.contains(session.clock_in.date()) || self.contains(session.clock_out.date())
    }

    pub fn filter(&self, sessions: Vec<DutySession>) -> Vec<DutySession> {
        sessions.into_iter().filter(|s| self.includes(s)).collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all dates"),
            (Some(s), None) => write!(f, "from {s}"),
            (None, Some(e)) => write!(f, "until {e}"),
            (Some(s), Some(e)) if s == e => write!(f, "{s}"),
            (Some(s), Some(e)) => write!(f, "{s} to {e}"),
        }
    }
}
