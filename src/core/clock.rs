use crate::core::ledger::AttendanceLedger;
use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::models::action::AttendanceAction;
use crate::models::event::AttendanceEvent;
use crate::ui::messages::success;
use chrono::NaiveDateTime;

/// High-level business logic for the `in` / `out` commands.
pub struct ClockLogic;

impl ClockLogic {
    /// Record `action` for `name`.
    ///
    /// `at = None` stamps `now` (real-time punch); `Some(ts)` is a backdated
    /// punch and may not lie after `now`.
    pub fn record<S: PeriodStore + ?Sized>(
        store: &mut S,
        name: &str,
        action: AttendanceAction,
        at: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> AppResult<AttendanceEvent> {
        if !store.has_staff(name)? {
            return Err(AppError::StaffNotFound(name.to_string()));
        }

        let timestamp = match at {
            Some(ts) if ts > now => return Err(AppError::FutureTimestamp(ts)),
            Some(ts) => ts,
            None => now,
        };

        let mut ledger = AttendanceLedger::load(store, name)?;
        let event = ledger.append(store, action, timestamp)?;

        let source = if at.is_some() { "backdated" } else { "realtime" };
        store.log_soft(
            action.label(),
            name,
            &format!("{} {} at {} ({source})", name, action.label(), event.time_str()),
        );

        success(format!(
            "{} clocked {} at {}.",
            name,
            action.label(),
            event.time_str()
        ));

        Ok(event)
    }
}
