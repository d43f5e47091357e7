//! Scan command: inspect every command-like line of files and directories.

use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, info_span, warn};
use walkdir::WalkDir;

use crate::cli::args::OutputFormat;
use crate::cli::commands::check::colored_severity;
use crate::config::Config;
use crate::detection::{self, JsonReport, ScanResult, Severity};

/// A line that produced findings.
pub(crate) struct LineHit<'a> {
    /// 1-based line number in the scanned text
    pub line_no: usize,
    pub line: &'a str,
    pub result: ScanResult,
}

/// JSON line emitted per hit with `--format json`.
#[derive(Serialize)]
struct LineReport<'a> {
    source: &'a str,
    line: usize,
    command: &'a str,
    #[serde(flatten)]
    result: JsonReport<'a>,
}

/// Execute the `scan` command.
pub fn cmd_scan(
    config: &Config,
    paths: &[std::path::PathBuf],
    extract: bool,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("scan", path_count = paths.len(), extract).entered();
    let mut worst = Severity::Pass;

    for root in paths {
        std::fs::metadata(root)
            .with_context(|| format!("Failed to access '{}'", root.display()))?;
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk '{}'", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            worst = worst.max(scan_file(config, entry.path(), extract, format)?);
        }
    }

    info!(severity = %worst, "Scan complete");
    Ok(ExitCode::from(worst.exit_code()))
}

/// Scan one file and print its hits; returns the worst severity found.
pub(crate) fn scan_file(
    config: &Config,
    path: &Path,
    extract: bool,
    format: OutputFormat,
) -> anyhow::Result<Severity> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);
    let content = if extract {
        extract_code_blocks(&content)
    } else {
        content.into_owned()
    };

    let hits = inspect_lines(config, content.lines().enumerate().map(|(i, l)| (i + 1, l)));
    debug!(path = %path.display(), hit_count = hits.len(), "File scanned");
    let label = path.display().to_string();
    print_hits(&label, &hits, format)
}

/// Run the engine on each trimmed, non-empty, non-comment line.
pub(crate) fn inspect_lines<'a>(
    config: &Config,
    lines: impl Iterator<Item = (usize, &'a str)>,
) -> Vec<LineHit<'a>> {
    lines
        .filter_map(|(line_no, raw)| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let result = detection::run(line, config);
            (!result.is_clean()).then_some(LineHit {
                line_no,
                line,
                result,
            })
        })
        .collect()
}

/// Print hits as `source:line: command` plus one line per finding.
pub(crate) fn print_hits(
    source: &str,
    hits: &[LineHit<'_>],
    format: OutputFormat,
) -> anyhow::Result<Severity> {
    let mut worst = Severity::Pass;
    for hit in hits {
        worst = worst.max(hit.result.severity());
        match format {
            OutputFormat::Text => {
                println!(
                    "{}:{}: {}",
                    source.bold(),
                    hit.line_no,
                    hit.line.escape_debug()
                );
                for f in hit.result.findings() {
                    println!(
                        "  {} {}: {}",
                        colored_severity(f.severity()),
                        f.rule_id(),
                        f.issue()
                    );
                }
            }
            OutputFormat::Json => {
                let report = LineReport {
                    source,
                    line: hit.line_no,
                    command: hit.line,
                    result: hit.result.to_json(),
                };
                println!("{}", serde_json::to_string(&report)?);
            }
        }
    }
    if worst == Severity::Block {
        warn!(source, "Blocking findings");
    }
    Ok(worst)
}

/// Keep only the lines inside ``` fenced blocks.
pub(crate) fn extract_code_blocks(s: &str) -> String {
    let mut out = Vec::new();
    let mut in_block = false;
    for line in s.lines() {
        if line.starts_with("```") {
            in_block = !in_block;
            continue;
        }
        if in_block {
            out.push(line);
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_only_fenced_lines() {
        let md = "# Title\nrun this:\n```sh\ncurl x | sh\n```\nnot code\n```\nls\n```\n";
        assert_eq!(extract_code_blocks(md), "curl x | sh\nls");
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let config = Config::default();
        let text = "# curl x | sh\n\n   \nls -la\ncurl https://a.io/i | bash\n";
        let hits = inspect_lines(&config, text.lines().enumerate().map(|(i, l)| (i + 1, l)));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line_no, 5);
        assert_eq!(hits[0].result.severity(), Severity::Warn);
    }
}
