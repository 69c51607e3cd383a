//! Unified application error type.
//! Every module (db, core, cli, export, utils) returns AppError so that the
//! binary can report failures in one place.

use chrono::{NaiveDate, NaiveDateTime};
use std::io;
use thiserror::Error;

/// Reasons an append to an attendance ledger is refused.
///
/// These are operator mistakes, not crashes: the offending event is not
/// written and the ledger is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerRejection {
    #[error("{name} is already clocked in since {since}: clock out first")]
    AlreadyClockedIn { name: String, since: NaiveDateTime },

    #[error("{name} is not clocked in: clock in before clocking out")]
    NotClockedIn { name: String },

    #[error("{name}: clock-out at {clock_out} must be later than clock-in at {clock_in}")]
    NonMonotonicClockOut {
        name: String,
        clock_in: NaiveDateTime,
        clock_out: NaiveDateTime,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Invalid attendance action: {0}")]
    InvalidAction(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("{0}")]
    Rejected(#[from] LedgerRejection),

    #[error("Backdated timestamp {0} lies in the future")]
    FutureTimestamp(NaiveDateTime),

    #[error("Invalid staff name: {0}")]
    InvalidName(String),

    #[error("Staff member '{0}' already exists")]
    DuplicateStaff(String),

    #[error("Expected hours must be a non-negative number, got {0}")]
    InvalidHours(f64),

    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    // ---------------------------
    // Not found
    // ---------------------------
    #[error("Staff member '{0}' not found in the current period")]
    StaffNotFound(String),

    #[error("No matching attendance record: {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Config / access
    // ---------------------------
    #[error("Configuration file not found: {0} (run `dutylog init --folder <DIR>` or pass --config)")]
    ConfigNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Wrong administrator password")]
    AdminDenied,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
