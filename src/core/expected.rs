use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub struct ExpectedLogic;

impl ExpectedLogic {
    /// Upsert the expected hours of a roster member.
    pub fn set<S: PeriodStore + ?Sized>(store: &mut S, name: &str, hours: f64) -> AppResult<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidHours(hours));
        }
        if !store.has_staff(name)? {
            return Err(AppError::StaffNotFound(name.to_string()));
        }

        store.upsert_expected(name, hours)?;
        store.log_soft(
            "expected",
            name,
            &format!("Expected worktime set to {hours} h"),
        );
        success(format!("{}'s expected worktime set to {} hours.", name, hours));

        Ok(())
    }
}
