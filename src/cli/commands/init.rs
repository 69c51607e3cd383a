use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::period::PeriodLogic;
use crate::db::store::PeriodStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::{period_db_path, period_label};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the configuration record (folder + administrator password) and
/// creates the period folder with a fully migrated store.
pub fn handle(cli: &Cli, cfg_path: &Path) -> AppResult<()> {
    let Commands::Init { folder } = &cli.command else {
        return Ok(());
    };

    if cfg_path.exists() {
        warning(format!(
            "Configuration file {} already exists and will be rewritten.",
            cfg_path.display()
        ));
    }

    let cfg = Config::new(folder, cli.password.as_deref());
    cfg.save(cfg_path)?;

    let db_path = period_db_path(&cfg.period_folder());

    println!("⚙️  Initializing dutylog…");
    println!("📄 Config file : {}", cfg_path.display());
    println!("🗄️  Database   : {}", db_path.display());

    let mut pool = PeriodLogic::open(&cfg)?;
    let label = period_label(&cfg.period_folder());
    pool.log_soft("init", &label, "Configuration and period store initialized");

    success(format!("dutylog initialized, current period: {}", label));
    Ok(())
}
