//! Path utilities: expand ~ and resolve the period store location.

use std::path::{Path, PathBuf};

/// File name of the per-period SQLite store inside the period folder.
pub const PERIOD_DB_FILE: &str = "attendance.sqlite";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Location of the period store for a given period folder.
pub fn period_db_path(folder: &Path) -> PathBuf {
    folder.join(PERIOD_DB_FILE)
}

/// Display label of a period: the last component of its folder.
pub fn period_label(folder: &Path) -> String {
    folder
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.to_string_lossy().to_string())
}
