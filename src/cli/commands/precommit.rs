//! Pre-commit command: scan staged files from a git hook.

use anyhow::{anyhow, Context};
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use tracing::{debug, info};

use crate::cli::args::OutputFormat;
use crate::cli::commands::scan::scan_file;
use crate::config::Config;
use crate::detection::Severity;

/// Execute the `pre-commit` command.
///
/// Scans `paths`, or the added/copied/modified staged files when none are
/// given. Directories and missing files are skipped.
pub fn cmd_pre_commit(config: &Config, paths: Vec<PathBuf>) -> anyhow::Result<ExitCode> {
    let paths = if paths.is_empty() {
        staged_files()?
    } else {
        paths
    };

    let mut worst = Severity::Pass;
    for path in &paths {
        if !path.is_file() {
            debug!(path = %path.display(), "Skipping non-file");
            continue;
        }
        worst = worst.max(scan_file(config, path, false, OutputFormat::Text)?);
    }
    info!(file_count = paths.len(), severity = %worst, "Pre-commit scan complete");
    Ok(ExitCode::from(worst.exit_code()))
}

fn staged_files() -> anyhow::Result<Vec<PathBuf>> {
    let out = Command::new("git")
        .args(["diff", "--cached", "--name-only", "--diff-filter=ACM"])
        .output()
        .context("Failed to run git")?;
    if !out.status.success() {
        return Err(anyhow!(
            "not a git repo or no staged files: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        ));
    }
    Ok(String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect())
}
