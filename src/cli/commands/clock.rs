use crate::cli::commands::require_admin;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::period::PeriodLogic;
use crate::errors::AppResult;
use crate::models::action::AttendanceAction;
use crate::utils::date;

/// Handle `in` and `out`: real-time punch, or backdated with `--at`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (name, at, action) = match &cli.command {
        Commands::In { name, at } => (name, at, AttendanceAction::ClockIn),
        Commands::Out { name, at } => (name, at, AttendanceAction::ClockOut),
        _ => return Ok(()),
    };

    let backdated = date::parse_optional_timestamp(at.as_ref())?;
    if backdated.is_some() {
        require_admin(cfg, &cli.password)?;
    }

    let mut pool = PeriodLogic::open(cfg)?;
    ClockLogic::record(&mut pool, name, action, backdated, date::now())?;

    Ok(())
}
