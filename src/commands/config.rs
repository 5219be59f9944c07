use crate::cli::ConfigActions;
use crate::config::{Config, get_config_path};
use anyhow::{Result, anyhow};
use log::info;
use std::path::{Path, PathBuf};

pub fn execute(action: ConfigActions, config: &Config, override_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(override_path)?;

    match action {
        ConfigActions::Show => {
            println!("\nCurrent Configuration ({}):", path.display());
            print!("{}", describe(config));
            Ok(())
        }
        ConfigActions::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigActions::Init { force } => {
            if path.exists() && !force {
                return Err(anyhow!(
                    "Config file {} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            Config::default().save_to(&path)?;
            info!("Wrote default config to {}", path.display());
            println!("Default configuration written to {}", path.display());
            Ok(())
        }
    }
}

fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_path(),
    }
}

/// Human readable summary of the settings.
pub fn describe(config: &Config) -> String {
    let mut text = String::new();
    text.push_str("\nField Settings:\n");
    text.push_str(&format!(
        "  Required: {}\n",
        if config.field.required { "Yes" } else { "No" }
    ));
    text.push_str(&format!("  Invalid Message: {}\n", config.field.invalid_message));
    text.push_str(&format!("  Required Message: {}\n", config.field.required_message));
    text.push_str("\nOutput Settings:\n");
    text.push_str(&format!("  Clock Format: {:?}\n", config.output.format));
    text.push_str("\nLogging Settings:\n");
    text.push_str(&format!("  Level: {}\n", config.logging.level));
    text
}
