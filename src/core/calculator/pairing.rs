//! Turns a ledger into duty sessions.

use crate::models::action::AttendanceAction;
use crate::models::event::AttendanceEvent;
use crate::models::session::DutySession;
use chrono::NaiveDateTime;

/// Whole minutes between two instants, floored.
pub fn elapsed_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().div_euclid(60)
}

/// Pair clock-ins with the following clock-out, in storage order.
///
/// Lenient on purpose: a later clock-in replaces a still-open one, and a
/// clock-out with nothing open is dropped. Sessions come out in the order
/// their clock-out events are met. Monotonicity is not re-checked, so a
/// ledger reordered by deletions can yield a negative duration.
pub fn pair_sessions(name: &str, events: &[AttendanceEvent]) -> Vec<DutySession> {
    let mut sessions = Vec::new();
    let mut open_sign_in: Option<NaiveDateTime> = None;

    for ev in events {
        match ev.action {
            AttendanceAction::ClockIn => {
                open_sign_in = Some(ev.timestamp);
            }
            AttendanceAction::ClockOut => {
                if let Some(clock_in) = open_sign_in.take() {
                    sessions.push(DutySession {
                        name: name.to_string(),
                        clock_in,
                        clock_out: ev.timestamp,
                        duration_minutes: elapsed_minutes(clock_in, ev.timestamp),
                    });
                }
            }
        }
    }

    sessions
}
