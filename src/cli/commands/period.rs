use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::PeriodLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::period_label;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &mut Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Period { set } = cmd {
        match set {
            Some(folder) => {
                PeriodLogic::switch(cfg, cfg_path, folder)?;
            }
            None => {
                info(format!(
                    "Current period: {} ({})",
                    period_label(&cfg.period_folder()),
                    cfg.period_folder().display()
                ));
            }
        }
    }
    Ok(())
}
