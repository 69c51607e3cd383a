use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expected::ExpectedLogic;
use crate::core::period::PeriodLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Expected { name, hours } = cmd {
        let mut pool = PeriodLogic::open(cfg)?;
        ExpectedLogic::set(&mut pool, name, *hours)?;
    }
    Ok(())
}
