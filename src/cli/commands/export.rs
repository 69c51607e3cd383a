use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::PeriodLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::range::resolve_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let window = resolve_range(range.from.as_ref(), range.to.as_ref(), range.range.as_ref())?;

        let mut pool = PeriodLogic::open(cfg)?;
        ExportLogic::export(&mut pool, *format, file, &window, *force)?;
    }
    Ok(())
}
