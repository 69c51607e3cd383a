//! Storage seam of a period: roster, expected worktime table and ledgers.
//!
//! The reconciliation engine only talks to [`PeriodStore`]; [`DbPool`] is the
//! SQLite adapter and [`crate::db::memory::MemoryStore`] the in-memory fake.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::expected::ExpectedWorktime;
use crate::ui::messages::warning;

pub trait PeriodStore {
    /// Staff names in insertion order.
    fn load_roster(&self) -> AppResult<Vec<String>>;

    /// Append `name` to the roster; `DuplicateStaff` if already present.
    fn add_staff(&mut self, name: &str) -> AppResult<()>;

    /// Remove `name` from the roster. Ledger rows are left in place.
    fn remove_staff(&mut self, name: &str) -> AppResult<bool>;

    fn load_expected(&self) -> AppResult<ExpectedWorktime>;

    fn upsert_expected(&mut self, name: &str, hours: f64) -> AppResult<()>;

    /// Events of one person in append order (empty when there is no ledger).
    fn load_ledger(&self, name: &str) -> AppResult<Vec<AttendanceEvent>>;

    /// Every name owning a ledger, roster member or not.
    fn ledger_names(&self) -> AppResult<Vec<String>>;

    fn append_event(&mut self, event: &AttendanceEvent) -> AppResult<()>;

    /// Remove the first event of `name`'s ledger matching `predicate`.
    fn delete_event(
        &mut self,
        name: &str,
        predicate: &dyn Fn(&AttendanceEvent) -> bool,
    ) -> AppResult<Option<AttendanceEvent>>;

    /// Internal operation log.
    fn record_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;

    fn has_staff(&self, name: &str) -> AppResult<bool> {
        Ok(self.load_roster()?.iter().any(|n| n == name))
    }

    /// Log an operation; a failure is only reported as a warning.
    fn log_soft(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.record_log(operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

impl PeriodStore for DbPool {
    fn load_roster(&self) -> AppResult<Vec<String>> {
        queries::load_staff(&self.conn)
    }

    fn add_staff(&mut self, name: &str) -> AppResult<()> {
        if queries::staff_exists(&self.conn, name)? {
            return Err(AppError::DuplicateStaff(name.to_string()));
        }
        queries::insert_staff(&self.conn, name)
    }

    fn remove_staff(&mut self, name: &str) -> AppResult<bool> {
        queries::delete_staff(&self.conn, name)
    }

    fn load_expected(&self) -> AppResult<ExpectedWorktime> {
        queries::load_expected(&self.conn)
    }

    fn upsert_expected(&mut self, name: &str, hours: f64) -> AppResult<()> {
        queries::upsert_expected(&self.conn, name, hours)
    }

    fn load_ledger(&self, name: &str) -> AppResult<Vec<AttendanceEvent>> {
        Ok(queries::load_ledger_rows(&self.conn, name)?
            .into_iter()
            .map(|(_, ev)| ev)
            .collect())
    }

    fn ledger_names(&self) -> AppResult<Vec<String>> {
        queries::ledger_names(&self.conn)
    }

    fn append_event(&mut self, event: &AttendanceEvent) -> AppResult<()> {
        queries::insert_event(&self.conn, event)
    }

    fn delete_event(
        &mut self,
        name: &str,
        predicate: &dyn Fn(&AttendanceEvent) -> bool,
    ) -> AppResult<Option<AttendanceEvent>> {
        let rows = queries::load_ledger_rows(&self.conn, name)?;

        match rows.into_iter().find(|(_, ev)| predicate(ev)) {
            Some((id, ev)) => {
                queries::delete_event_by_id(&self.conn, id)?;
                Ok(Some(ev))
            }
            None => Ok(None),
        }
    }

    fn record_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }

    fn has_staff(&self, name: &str) -> AppResult<bool> {
        queries::staff_exists(&self.conn, name)
    }
}
