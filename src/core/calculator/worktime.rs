//! Reduces filtered duty sessions and the expected table to per-person totals.

use crate::models::expected::ExpectedWorktime;
use crate::models::session::DutySession;
use crate::models::summary::WorktimeSummary;
use std::collections::HashMap;

/// Minutes worked per name, remembering first-insertion order.
#[derive(Debug, Default)]
struct Accumulator {
    order: Vec<String>,
    minutes: HashMap<String, i64>,
}

impl Accumulator {
    fn touch(&mut self, name: &str) {
        if !self.minutes.contains_key(name) {
            self.order.push(name.to_string());
            self.minutes.insert(name.to_string(), 0);
        }
    }

    fn add(&mut self, name: &str, minutes: i64) {
        self.touch(name);
        if let Some(total) = self.minutes.get_mut(name) {
            *total += minutes;
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.minutes.contains_key(name)
    }
}

pub fn total_minutes(sessions: &[DutySession]) -> i64 {
    sessions.iter().map(|s| s.duration_minutes).sum()
}

/// One summary per roster member, per expected-table entry and per other
/// ledger owner with at least one session.
///
/// Output order: roster order, then names only in the expected table, then
/// names only found in ledgers. Callers wanting name order must sort.
pub fn aggregate(
    roster: &[String],
    sessions: &[(String, Vec<DutySession>)],
    expected: &ExpectedWorktime,
) -> Vec<WorktimeSummary> {
    let mut acc = Accumulator::default();

    for name in roster {
        acc.touch(name);
    }
    for name in expected.names() {
        acc.touch(name);
    }
    for (name, list) in sessions {
        if list.is_empty() && !acc.contains(name) {
            continue;
        }
        acc.add(name, total_minutes(list));
    }

    acc.order
        .iter()
        .map(|name| {
            let actual = acc.minutes.get(name).copied().unwrap_or(0);
            WorktimeSummary::new(name, expected.minutes_for(name), actual)
        })
        .collect()
}

/// Sort summaries by name for a stable presentation.
pub fn sort_by_name(summaries: &mut [WorktimeSummary]) {
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
}
