pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod expected;
pub mod export;
pub mod init;
pub mod log;
pub mod period;
pub mod records;
pub mod sessions;
pub mod staff;
pub mod worktime;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Check the administrator password, from `--password` or typed on stdin.
pub(crate) fn require_admin(cfg: &Config, given: &Option<String>) -> AppResult<()> {
    let password = match given {
        Some(p) => p.clone(),
        None => {
            print!("Administrator password: ");
            io::stdout().flush()?;

            let mut s = String::new();
            if io::stdin().read_line(&mut s)? == 0 {
                return Err(AppError::AdminDenied);
            }
            s.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    cfg.verify_password(&password)
}
