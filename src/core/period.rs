use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::PeriodStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::period_label;
use std::path::Path;

/// Switching between periods (semester folders).
pub struct PeriodLogic;

impl PeriodLogic {
    /// Open the period folder, creating it and its tables on first use.
    pub fn open(cfg: &Config) -> AppResult<DbPool> {
        DbPool::open_period(&cfg.period_folder())
    }

    /// Point the configuration at `folder` and persist it. Roster, expected
    /// table and ledgers are swapped as a unit; nothing is merged.
    pub fn switch(cfg: &mut Config, cfg_path: &Path, folder: &str) -> AppResult<DbPool> {
        cfg.semester_folder = folder.to_string();

        let mut pool = Self::open(cfg)?;
        cfg.save(cfg_path)?;

        let label = period_label(&cfg.period_folder());
        pool.log_soft("period", &label, &format!("Switched to period {label}"));
        success(format!("Current period: {}", label));

        Ok(pool)
    }
}
