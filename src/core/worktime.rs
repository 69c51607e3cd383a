use crate::core::calculator::range::DateRange;
use crate::core::calculator::worktime::{aggregate, sort_by_name};
use crate::core::ledger::AttendanceLedger;
use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::models::session::DutySession;
use crate::models::summary::WorktimeSummary;

/// Everything the worktime table and the export need.
#[derive(Debug, Default)]
pub struct WorktimeReport {
    pub summaries: Vec<WorktimeSummary>,
    /// Qualifying sessions per summary name, sorted by clock-in.
    pub sessions: Vec<(String, Vec<DutySession>)>,
}

pub struct WorktimeLogic;

impl WorktimeLogic {
    /// Paired and filtered sessions of one person, sorted by clock-in.
    pub fn sessions_for<S: PeriodStore + ?Sized>(
        store: &S,
        name: &str,
        range: &DateRange,
    ) -> AppResult<Vec<DutySession>> {
        let ledger = AttendanceLedger::load(store, name)?;

        if ledger.is_empty() && !store.has_staff(name)? {
            return Err(AppError::StaffNotFound(name.to_string()));
        }

        let mut sessions = range.filter(ledger.sessions());
        sessions.sort_by_key(|s| s.clock_in);
        Ok(sessions)
    }

    /// Summaries for the whole period plus the sessions behind them.
    pub fn report<S: PeriodStore + ?Sized>(
        store: &S,
        range: &DateRange,
        sort: bool,
    ) -> AppResult<WorktimeReport> {
        let roster = store.load_roster()?;
        let expected = store.load_expected()?;

        // roster first, then ledgers whose owner left the roster
        let mut owners = roster.clone();
        for name in store.ledger_names()? {
            if !owners.contains(&name) {
                owners.push(name);
            }
        }

        let mut per_person = Vec::with_capacity(owners.len());
        for name in owners {
            let ledger = AttendanceLedger::load(store, &name)?;
            per_person.push((name, range.filter(ledger.sessions())));
        }

        let mut summaries = aggregate(&roster, &per_person, &expected);
        if sort {
            sort_by_name(&mut summaries);
        }

        let sessions = summaries
            .iter()
            .map(|s| {
                let mut list = per_person
                    .iter()
                    .find(|(n, _)| *n == s.name)
                    .map(|(_, l)| l.clone())
                    .unwrap_or_default();
                list.sort_by_key(|d| d.clock_in);
                (s.name.clone(), list)
            })
            .collect();

        Ok(WorktimeReport {
            summaries,
            sessions,
        })
    }
}
