use clap::ValueEnum;
use serde::Serialize;

/// Token stored in the ledger for a clock-in (簽到).
pub const CLOCK_IN_TOKEN: &str = "簽到";
/// Token stored in the ledger for a clock-out (簽退).
pub const CLOCK_OUT_TOKEN: &str = "簽退";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
pub enum AttendanceAction {
    #[value(name = "in")]
    ClockIn,
    #[value(name = "out")]
    ClockOut,
}

impl AttendanceAction {
    /// Convert enum → DB token
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceAction::ClockIn => CLOCK_IN_TOKEN,
            AttendanceAction::ClockOut => CLOCK_OUT_TOKEN,
        }
    }

    /// Convert DB token → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            CLOCK_IN_TOKEN => Some(AttendanceAction::ClockIn),
            CLOCK_OUT_TOKEN => Some(AttendanceAction::ClockOut),
            _ => None,
        }
    }

    /// Short label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceAction::ClockIn => "in",
            AttendanceAction::ClockOut => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, AttendanceAction::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, AttendanceAction::ClockOut)
    }
}
