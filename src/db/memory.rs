//! In-memory [`PeriodStore`], used to exercise the engine without SQLite.

use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::expected::ExpectedWorktime;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub roster: Vec<String>,
    pub expected: ExpectedWorktime,
    /// All ledgers interleaved, in append order.
    pub events: Vec<AttendanceEvent>,
    pub log: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the given roster already in place.
    pub fn with_staff(names: &[&str]) -> Self {
        Self {
            roster: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl PeriodStore for MemoryStore {
    fn load_roster(&self) -> AppResult<Vec<String>> {
        Ok(self.roster.clone())
    }

    fn add_staff(&mut self, name: &str) -> AppResult<()> {
        if self.roster.iter().any(|n| n == name) {
            return Err(AppError::DuplicateStaff(name.to_string()));
        }
        self.roster.push(name.to_string());
        Ok(())
    }

    fn remove_staff(&mut self, name: &str) -> AppResult<bool> {
        let before = self.roster.len();
        self.roster.retain(|n| n != name);
        Ok(self.roster.len() != before)
    }

    fn load_expected(&self) -> AppResult<ExpectedWorktime> {
        Ok(self.expected.clone())
    }

    fn upsert_expected(&mut self, name: &str, hours: f64) -> AppResult<()> {
        self.expected.upsert(name, hours);
        Ok(())
    }

    fn load_ledger(&self, name: &str) -> AppResult<Vec<AttendanceEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|ev| ev.name == name)
            .cloned()
            .collect())
    }

    fn ledger_names(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for ev in &self.events {
            if !names.contains(&ev.name) {
                names.push(ev.name.clone());
            }
        }
        Ok(names)
    }

    fn append_event(&mut self, event: &AttendanceEvent) -> AppResult<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn delete_event(
        &mut self,
        name: &str,
        predicate: &dyn Fn(&AttendanceEvent) -> bool,
    ) -> AppResult<Option<AttendanceEvent>> {
        let pos = self
            .events
            .iter()
            .position(|ev| ev.name == name && predicate(ev));

        Ok(pos.map(|i| self.events.remove(i)))
    }

    fn record_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log
            .push((operation.to_string(), target.to_string(), message.to_string()));
        Ok(())
    }
}
