use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::period::PeriodLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let mut pool = PeriodLogic::open(cfg)?;
        BackupLogic::backup(&mut pool, file, *compress, *force)?;
    }

    Ok(())
}
