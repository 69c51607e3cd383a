use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::period::PeriodLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        name,
        action,
        at,
        yes,
    } = cmd
    {
        let ts = date::parse_timestamp(at).ok_or_else(|| AppError::InvalidTimestamp(at.into()))?;

        let prompt = format!(
            "Delete {} {} at {}? This action is irreversible.",
            name,
            action.label(),
            ts
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = PeriodLogic::open(cfg)?;
        let removed = DeleteLogic::apply(&mut pool, name, *action, ts)?;

        success(format!(
            "Record deleted: {} {} {}",
            removed.name,
            action.label(),
            removed.time_str()
        ));
    }

    Ok(())
}
