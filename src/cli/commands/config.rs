//! Config command: initialize and display preexec configuration.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::ConfigAction;
use crate::config::Config;

/// Execute the `config` subcommand (init, show).
///
/// `config_file` is the global `--config` override, if any.
pub fn cmd_config(action: ConfigAction, config_file: Option<&Path>) -> anyhow::Result<ExitCode> {
    let active_path = || {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_config_path)
    };
    match action {
        ConfigAction::Init { path } => {
            let config_path: PathBuf = path.unwrap_or_else(active_path);

            // Create parent directories
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }

            let toml = Config::default()
                .to_toml()
                .context("Failed to serialize default config")?;
            std::fs::write(&config_path, toml).with_context(|| {
                format!("Failed to write config file '{}'", config_path.display())
            })?;

            debug!(path = %config_path.display(), "Config file created");
            println!("Created {}", config_path.display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Show => {
            let config_path = active_path();
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config file '{}'", config_path.display())
                })?;
                println!("{}", content);
                debug!("Config displayed");
            } else {
                println!("No config file found at: {}", config_path.display());
                println!("Run 'preexec config init' to create one.");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
