use crate::cli::commands::require_admin;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::period::PeriodLogic;
use crate::core::staff::StaffLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Roster management; every action needs the administrator password.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { list, add, remove } = &cli.command {
        require_admin(cfg, &cli.password)?;

        let mut pool = PeriodLogic::open(cfg)?;

        if let Some(name) = add {
            StaffLogic::add(&mut pool, name)?;
        }

        if let Some(name) = remove {
            StaffLogic::remove(&mut pool, name)?;
        }

        if *list || (add.is_none() && remove.is_none()) {
            let roster = StaffLogic::list(&pool)?;
            if roster.is_empty() {
                info("The roster of this period is empty.");
            } else {
                header("Roster");
                for (i, name) in roster.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, name);
                }
            }
        }
    }
    Ok(())
}
