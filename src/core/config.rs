use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        println!("⛽ Resolved data file: {}", cfg.data_path().display());
        Ok(())
    }

    /// Open the config file in the requested editor, falling back to
    /// $EDITOR/$VISUAL (or nano/notepad).
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `fuellog init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ if editor_to_use == default_editor => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{}'",
                    editor_to_use
                )));
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("{}: {}", default_editor, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, status
            )));
        }

        success(format!(
            "Configuration file edited successfully using fallback '{}'",
            default_editor
        ));
        Ok(())
    }
}
