// src/export/model.rs

use crate::models::session::DutySession;
use crate::models::summary::WorktimeSummary;
use serde::Serialize;

pub(crate) const SUMMARY_SHEET: &str = "工時總表";

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec!["姓名", "應到工時", "實際工時", "差異"]
}

pub(crate) fn session_headers() -> Vec<&'static str> {
    vec!["姓名", "簽到時間", "簽退時間", "值班時長"]
}

/// Flat worktime row, every duration already rendered as `[+|-]HH:MM`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SummaryExport {
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub diff: String,
}

impl From<&WorktimeSummary> for SummaryExport {
    fn from(s: &WorktimeSummary) -> Self {
        let mut row = s.to_row().into_iter();
        Self {
            name: row.next().unwrap_or_default(),
            expected: row.next().unwrap_or_default(),
            actual: row.next().unwrap_or_default(),
            diff: row.next().unwrap_or_default(),
        }
    }
}

impl SummaryExport {
    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.expected.clone(),
            self.actual.clone(),
            self.diff.clone(),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionExport {
    pub name: String,
    pub clock_in: String,
    pub clock_out: String,
    pub duration: String,
}

impl From<&DutySession> for SessionExport {
    fn from(s: &DutySession) -> Self {
        Self {
            name: s.name.clone(),
            clock_in: s.clock_in_str(),
            clock_out: s.clock_out_str(),
            duration: s.duration_str(),
        }
    }
}

impl SessionExport {
    pub(crate) fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.clock_in.clone(),
            self.clock_out.clone(),
            self.duration.clone(),
        ]
    }
}

/// Top-level JSON document.
#[derive(Serialize, Debug)]
pub(crate) struct ReportExport<'a> {
    pub summary: &'a [SummaryExport],
    pub sessions: &'a [SessionExport],
}
