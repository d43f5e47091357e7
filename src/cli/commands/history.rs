//! History command: scan recent shell history.

use anyhow::{anyhow, Context};
use std::process::ExitCode;
use tracing::info;

use crate::cli::args::{HistoryShell, OutputFormat};
use crate::cli::commands::scan::{inspect_lines, print_hits};
use crate::config::Config;

/// Execute the `history` command.
pub fn cmd_history(config: &Config, shell: HistoryShell, last: usize) -> anyhow::Result<ExitCode> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    let path = home.join(shell.history_file());
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read history file '{}'", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(last);
    let recent = lines[start..].iter().enumerate().map(|(i, &line)| {
        let line = match shell {
            HistoryShell::Zsh => strip_zsh_metadata(line),
            HistoryShell::Bash => line,
        };
        (start + i + 1, line)
    });

    let hits = inspect_lines(config, recent);
    info!(
        path = %path.display(),
        scanned = lines.len() - start,
        hit_count = hits.len(),
        "History scanned"
    );
    let worst = print_hits(&path.display().to_string(), &hits, OutputFormat::Text)?;
    Ok(ExitCode::from(worst.exit_code()))
}

/// Drop the `: <epoch>:<duration>;` prefix of zsh extended history.
fn strip_zsh_metadata(line: &str) -> &str {
    if !line.starts_with(": ") {
        return line;
    }
    match line.split_once(';') {
        Some((_, cmd)) => cmd,
        None => line,
    }
}
