//! Diff command: inspect two commands side by side.

use anyhow::bail;
use std::process::ExitCode;

use crate::cli::commands::check::colored_severity;
use crate::cli::input;
use crate::config::Config;
use crate::detection::{self, ScanResult};

/// Execute the `diff` command.
///
/// Always exits 0: the comparison is informational.
pub fn cmd_diff(
    config: &Config,
    first: Option<String>,
    second: Option<String>,
) -> anyhow::Result<ExitCode> {
    let (a, b) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => {
            let text = input::read_stdin()?;
            let mut lines = text.lines();
            match (lines.next(), lines.next()) {
                (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
                    (a.to_string(), b.to_string())
                }
                _ => bail!("usage: preexec diff <cmd1> <cmd2>  OR  two lines on stdin"),
            }
        }
        _ => bail!("diff needs two commands"),
    };

    print_side("A", &a, &detection::run(&a, config));
    print_side("B", &b, &detection::run(&b, config));
    Ok(ExitCode::SUCCESS)
}

fn print_side(label: &str, cmd: &str, result: &ScanResult) {
    println!("--- command {}", label);
    println!("{}", cmd.escape_debug());
    println!(
        "  severity={} exit={} findings={}",
        colored_severity(result.severity()),
        result.exit_code(),
        result.findings().len()
    );
    for f in result.findings() {
        println!("  - {}: {}", f.rule_id(), f.issue());
    }
}
