use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::period::PeriodLogic;
use crate::db::store::PeriodStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_action;
use crate::utils::table::Table;

/// Last `limit` events of one ledger, in storage order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { name, limit } = cmd {
        let pool = PeriodLogic::open(cfg)?;
        let ledger = AttendanceLedger::load(&pool, name)?;

        if ledger.is_empty() {
            if !pool.has_staff(name)? {
                return Err(AppError::StaffNotFound(name.clone()));
            }
            info(format!("No attendance records for {}.", name));
            return Ok(());
        }

        header(format!("Recent records of {}", ledger.name()));

        let mut table = Table::new(&["姓名", "動作", "日期", "時間"]);
        for ev in ledger.recent(*limit) {
            table.add_row(vec![
                ev.name.clone(),
                colorize_action(ev.action.to_db_str(), ev.action.is_in()),
                ev.date_str(),
                ev.time_str(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
