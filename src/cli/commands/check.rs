//! Check command: inspect a single command line.

use anyhow::bail;
use colored::*;
use std::process::ExitCode;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::cli::input;
use crate::config::Config;
use crate::detection::{self, Finding, ScanResult, Severity};

/// Execute the `check` command.
pub fn cmd_check(
    config: &Config,
    format: OutputFormat,
    clipboard: bool,
    command: &[String],
) -> anyhow::Result<ExitCode> {
    let cmd = if clipboard {
        input::read_clipboard()?
    } else {
        input::joined(command)
    };
    if cmd.trim().is_empty() {
        bail!("no command to check");
    }

    let result = detection::run(&cmd, config);
    info!(
        severity = %result.severity(),
        finding_count = result.findings().len(),
        source = if clipboard { "clipboard" } else { "args" },
        "Check complete"
    );

    match format {
        OutputFormat::Text => print_findings(&result),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result.to_json())?);
        }
    }
    Ok(ExitCode::from(result.exit_code()))
}

/// Print each finding as a `key: value` block.
pub(crate) fn print_findings(result: &ScanResult) {
    for f in result.findings() {
        println!("{} {}", colored_severity(f.severity()), f.rule_id().cyan());
        print_fields(f);
        println!();
    }
}

fn print_fields(f: &Finding) {
    // Tokens are printed escaped: they may carry ESC and invisible characters.
    println!(" token: {}", f.token().escape_debug());
    println!(" issue: {}", f.issue());
    println!(" position: {}", f.position());
    println!(" suggestion: {}", f.suggestion());
}

pub(crate) fn colored_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Pass => severity.label().green(),
        Severity::Warn => severity.label().yellow().bold(),
        Severity::Block => severity.label().red().bold(),
    }
}
