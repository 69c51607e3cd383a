use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Roster management for the active period.
pub struct StaffLogic;

impl StaffLogic {
    pub fn list<S: PeriodStore + ?Sized>(store: &S) -> AppResult<Vec<String>> {
        store.load_roster()
    }

    /// Add a trimmed, non-empty, not yet present name.
    pub fn add<S: PeriodStore + ?Sized>(store: &mut S, raw: &str) -> AppResult<String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("name cannot be empty".into()));
        }

        store.add_staff(name)?;
        store.log_soft("staff_add", name, &format!("Added {name} to the roster"));
        success(format!("Added {} to the roster.", name));

        Ok(name.to_string())
    }

    /// Remove a name from the roster. The person's ledger stays in the store.
    pub fn remove<S: PeriodStore + ?Sized>(store: &mut S, raw: &str) -> AppResult<()> {
        let name = raw.trim();
        if !store.remove_staff(name)? {
            return Err(AppError::StaffNotFound(name.to_string()));
        }

        store.log_soft(
            "staff_remove",
            name,
            &format!("Removed {name} from the roster"),
        );
        success(format!("Removed {} from the roster.", name));

        if !store.load_ledger(name)?.is_empty() {
            info(format!("{}'s attendance records are kept.", name));
        }

        Ok(())
    }
}
