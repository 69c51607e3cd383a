use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the record with the password masked.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        let masked = Config {
            admin_password: "*".repeat(cfg.admin_password.chars().count()),
            ..cfg.clone()
        };
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(&masked)?);
        Ok(())
    }

    /// Open the record in an editor, falling back to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited using '{}'", editor_to_use));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited using '{}'", default_editor));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration with '{}'",
                default_editor
            ))),
        }
    }
}
