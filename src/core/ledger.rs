//! Per-person attendance ledger and the rules for appending to it.

use crate::core::calculator::pairing::pair_sessions;
use crate::db::store::PeriodStore;
use crate::errors::{AppResult, LedgerRejection};
use crate::models::action::AttendanceAction;
use crate::models::event::AttendanceEvent;
use crate::models::session::DutySession;
use chrono::NaiveDateTime;

/// Ordered event history of one staff member.
///
/// Appends must keep the actions alternating (in, out, in, out, ...) with each
/// clock-out strictly after its clock-in. Deletions are not re-validated.
#[derive(Debug, Clone)]
pub struct AttendanceLedger {
    name: String,
    events: Vec<AttendanceEvent>,
}

impl AttendanceLedger {
    pub fn new(name: &str, events: Vec<AttendanceEvent>) -> Self {
        Self {
            name: name.to_string(),
            events,
        }
    }

    pub fn load<S: PeriodStore + ?Sized>(store: &S, name: &str) -> AppResult<Self> {
        Ok(Self::new(name, store.load_ledger(name)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the clock-in still waiting for its clock-out, if the last
    /// action in storage order is a clock-in.
    pub fn open_clock_in(&self) -> Option<NaiveDateTime> {
        self.events.iter().fold(None, |_, ev| match ev.action {
            AttendanceAction::ClockIn => Some(ev.timestamp),
            AttendanceAction::ClockOut => None,
        })
    }

    /// Check whether `action` at `timestamp` may be appended.
    pub fn validate(
        &self,
        action: AttendanceAction,
        timestamp: NaiveDateTime,
    ) -> Result<(), LedgerRejection> {
        let open = self.open_clock_in();

        match (action, open) {
            (AttendanceAction::ClockIn, Some(since)) => Err(LedgerRejection::AlreadyClockedIn {
                name: self.name.clone(),
                since,
            }),
            (AttendanceAction::ClockIn, None) => Ok(()),
            (AttendanceAction::ClockOut, None) => Err(LedgerRejection::NotClockedIn {
                name: self.name.clone(),
            }),
            (AttendanceAction::ClockOut, Some(clock_in)) if timestamp <= clock_in => {
                Err(LedgerRejection::NonMonotonicClockOut {
                    name: self.name.clone(),
                    clock_in,
                    clock_out: timestamp,
                })
            }
            (AttendanceAction::ClockOut, Some(_)) => Ok(()),
        }
    }

    /// Validate, persist through `store`, then expose the event to reads.
    /// On rejection nothing is written.
    pub fn append<S: PeriodStore + ?Sized>(
        &mut self,
        store: &mut S,
        action: AttendanceAction,
        timestamp: NaiveDateTime,
    ) -> AppResult<AttendanceEvent> {
        let event = AttendanceEvent::new(&self.name, action, timestamp);
        self.validate(action, event.timestamp)?;

        store.append_event(&event)?;
        self.events.push(event.clone());
        Ok(event)
    }

    /// Remove the first event matching `predicate`; the remaining ledger is
    /// not re-checked for alternation.
    pub fn delete<S: PeriodStore + ?Sized>(
        &mut self,
        store: &mut S,
        predicate: &dyn Fn(&AttendanceEvent) -> bool,
    ) -> AppResult<Option<AttendanceEvent>> {
        let removed = store.delete_event(&self.name, predicate)?;

        if removed.is_some()
            && let Some(i) = self.events.iter().position(|ev| predicate(ev))
        {
            self.events.remove(i);
        }

        Ok(removed)
    }

    pub fn sessions(&self) -> Vec<DutySession> {
        pair_sessions(&self.name, &self.events)
    }

    /// The last `n` events in storage order.
    pub fn recent(&self, n: usize) -> &[AttendanceEvent] {
        let skip = self.events.len().saturating_sub(n);
        &self.events[skip..]
    }
}
