use serde::Serialize;

/// Expected hours per staff member for the active period.
///
/// Keeps table order; a name appears at most once (upsert, last write wins).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExpectedWorktime {
    entries: Vec<(String, f64)>,
}

impl ExpectedWorktime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, name: &str, hours: f64) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = hours,
            None => self.entries.push((name.to_string(), hours)),
        }
    }

    /// Expected hours for `name`, 0 when absent.
    pub fn hours_for(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| *h)
            .unwrap_or(0.0)
    }

    /// Expected hours converted to whole minutes, truncated toward zero.
    pub fn minutes_for(&self, name: &str) -> i64 {
        (self.hours_for(name) * 60.0) as i64
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for ExpectedWorktime {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = ExpectedWorktime::new();
        for (name, hours) in iter {
            table.upsert(&name, hours);
        }
        table
    }
}
