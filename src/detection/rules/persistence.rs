//! Persistence and dynamic execution detector.

use crate::detection::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Cron,
    Systemd,
    Launchd,
    Eval,
}

static PATTERNS: LazyLock<Vec<(Kind, Regex)>> = LazyLock::new(|| {
    [
        (Kind::Cron, r"(?i)(crontab\s|/etc/cron|/var/spool/cron)"),
        (
            Kind::Systemd,
            r"(?i)(systemctl\s+(enable|start)|/etc/systemd)",
        ),
        (
            Kind::Launchd,
            r"(?i)(launchd|launchctl\s+load|~/Library/LaunchAgents)",
        ),
        (Kind::Eval, r"eval\s*\$?\s*\("),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        let re = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid {kind:?} pattern {pattern:?}: {e}"));
        (kind, re)
    })
    .collect()
});

/// Each pattern is scanned independently, so findings are grouped by
/// pattern (cron, systemd, launchd, eval) rather than by position.
pub(super) fn persistence(cmd: &str) -> Vec<Finding> {
    PATTERNS
        .iter()
        .flat_map(|(kind, re)| {
            re.find_iter(cmd).map(move |m| {
                let issue = match kind {
                    Kind::Eval => "eval $(...) can run arbitrary code".to_string(),
                    _ => format!(
                        "suspicious persistence or dynamic execution: {}",
                        m.as_str()
                    ),
                };
                Finding::new(
                    "persistence-patterns",
                    Severity::Warn,
                    m.as_str(),
                    issue,
                    m.start(),
                    "review before enabling cron/systemd/launchd or using eval",
                )
            })
        })
        .collect()
}
