use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// Persistent key-value record read at startup and rewritten on period change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    pub semester_folder: String,
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Config {
    pub fn new(semester_folder: &str, admin_password: Option<&str>) -> Self {
        Self {
            admin_password: admin_password
                .map(str::to_string)
                .unwrap_or_else(default_admin_password),
            semester_folder: semester_folder.to_string(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dutylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".dutylog")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutylog.conf")
    }

    /// Config path to use: the `--config` override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load the record. A missing file is a hard stop for the caller.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        if cfg.semester_folder.trim().is_empty() {
            return Err(AppError::Config("semester_folder is empty".into()));
        }
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Active period folder with `~` expanded.
    pub fn period_folder(&self) -> PathBuf {
        expand_tilde(&self.semester_folder)
    }

    pub fn verify_password(&self, given: &str) -> AppResult<()> {
        if given == self.admin_password {
            Ok(())
        } else {
            Err(AppError::AdminDenied)
        }
    }
}
