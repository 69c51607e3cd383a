//! dutylog library root.
//! Exposes the CLI parser, the high-level run() function and the
//! reconciliation engine (ledger, pairing, range filter, aggregation).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;
use ui::messages::error;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &mut Config, cfg_path: &Path) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init { .. } => c::init::handle(cli, cfg_path),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg, cfg_path),
        Commands::Period { .. } => c::period::handle(&cli.command, cfg, cfg_path),
        Commands::Staff { .. } => c::staff::handle(cli, cfg),
        Commands::In { .. } | Commands::Out { .. } => c::clock::handle(cli, cfg),
        Commands::Records { .. } => c::records::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::Expected { .. } => c::expected::handle(&cli.command, cfg),
        Commands::Sessions { .. } => c::sessions::handle(&cli.command, cfg),
        Commands::Worktime { .. } => c::worktime::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg_path = Config::resolve_path(cli.config.as_deref());

    // init is the only command that runs without a configuration record
    if matches!(cli.command, Commands::Init { .. }) {
        return cli::commands::init::handle(&cli, &cfg_path);
    }

    let mut cfg = match Config::load(&cfg_path) {
        Ok(cfg) => cfg,
        Err(e @ AppError::ConfigNotFound(_)) => {
            error("Cannot start without a configuration record.");
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    dispatch(&cli, &mut cfg, &cfg_path)
}
