use crate::core::ledger::AttendanceLedger;
use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::models::action::AttendanceAction;
use crate::models::event::{AttendanceEvent, TIMESTAMP_FORMAT};
use crate::ui::messages::{info, warning};
use chrono::NaiveDateTime;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the first ledger row equal to (name, action, date, time).
    ///
    /// The ledger is not re-validated afterwards: removing an interior event
    /// can leave the remaining actions out of alternation.
    pub fn apply<S: PeriodStore + ?Sized>(
        store: &mut S,
        name: &str,
        action: AttendanceAction,
        timestamp: NaiveDateTime,
    ) -> AppResult<AttendanceEvent> {
        let mut ledger = AttendanceLedger::load(store, name)?;

        if ledger.is_empty() {
            return Err(AppError::RecordNotFound(format!("{name} has no ledger")));
        }

        let target = name.to_string();
        let removed = ledger
            .delete(store, &|ev: &AttendanceEvent| ev.matches(&target, action, timestamp))?
            .ok_or_else(|| {
                AppError::RecordNotFound(format!(
                    "{} {} {}",
                    name,
                    action.label(),
                    timestamp.format(TIMESTAMP_FORMAT)
                ))
            })?;

        store.log_soft(
            "del",
            name,
            &format!("Deleted {} {}", action.label(), removed.time_str()),
        );

        info(format!(
            "Deleted {} {} at {}",
            name,
            action.label(),
            removed.time_str()
        ));

        if ledger.events().windows(2).any(|w| w[0].action == w[1].action)
            || ledger.events().first().is_some_and(|ev| ev.action.is_out())
        {
            warning(format!(
                "{}'s ledger no longer alternates in/out; unmatched clock-outs will be ignored.",
                name
            ));
        }

        Ok(removed)
    }
}
