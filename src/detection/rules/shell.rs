//! Download-and-execute and dotfile tampering detectors.

use crate::detection::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

static PIPE_TO_SHELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(curl|wget)\s+[^|]*\s*\|\s*(bash|sh|zsh|dash|ksh|csh|tcsh)\b")
        .expect("pipe-to-shell pattern is valid")
});

/// Sensitive paths plus the redirect operators themselves.
const DOTFILE_TARGETS: [&str; 7] = [
    ".bashrc",
    ".zshrc",
    ".profile",
    ".bash_profile",
    ".ssh/",
    ">>",
    ">",
];

pub(super) fn pipe_to_shell(cmd: &str) -> Vec<Finding> {
    PIPE_TO_SHELL
        .find_iter(cmd)
        .map(|m| {
            Finding::new(
                "pipe-to-shell",
                Severity::Warn,
                m.as_str(),
                format!("pattern: {}", m.as_str()),
                m.start(),
                "download, inspect, then execute",
            )
        })
        .collect()
}

/// Reports the first occurrence of each target when the text before it
/// looks like a write: a trailing redirect, or `echo`/`cat` earlier on.
pub(super) fn dotfile_writes(cmd: &str) -> Vec<Finding> {
    // ASCII lowering keeps byte offsets aligned with `cmd`.
    let lower = cmd.to_ascii_lowercase();
    DOTFILE_TARGETS
        .iter()
        .filter_map(|target| {
            let idx = lower.find(target)?;
            let before = lower[..idx].trim();
            let looks_like_write = before.ends_with('>')
                || before.contains("echo")
                || before.contains("cat");
            if !looks_like_write {
                return None;
            }
            Some(Finding::new(
                "dotfile-write",
                Severity::Warn,
                word_around(cmd, idx, target.len()),
                format!("writes to: {target}"),
                idx,
                "review before writing to dotfiles or .ssh",
            ))
        })
        .collect()
}

/// Widen `start..start + width` to the surrounding space-delimited word.
fn word_around(s: &str, start: usize, width: usize) -> &str {
    let is_sep = |c: char| c == ' ' || c == '\n';
    let from = s[..start].rfind(is_sep).map_or(0, |i| i + 1);
    let to = s[start + width..]
        .find(is_sep)
        .map_or(s.len(), |i| start + width + i);
    &s[from..to]
}
