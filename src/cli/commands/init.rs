use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{ExitStatus, SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.bulbulrc.json` into the working directory.
pub fn init() -> Result<ExitStatus> {
    let working_dir = env::current_dir().context("Failed to read working directory")?;
    match write_default_config(&working_dir)? {
        Some(_) => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
            Ok(ExitStatus::Failure)
        }
    }
}

/// Returns the written path, or `None` when `dir` already has a config.
fn write_default_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(None);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(Some(config_path))
}
