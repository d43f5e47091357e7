//! Command substitution and process substitution detector.
//!
//! Parentheses are matched up to the first `)`, so `$(echo $(id))` yields
//! `$(echo $(id)`. Nested substitutions are not balanced.

use crate::detection::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

static DOLLAR_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^)]*\)").expect("$( ) pattern is valid"));
static BACKTICKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("backtick pattern is valid"));
static PROCESS_SUBST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\([^)]*\)").expect("<( ) pattern is valid"));

pub(super) fn subshells(cmd: &str) -> Vec<Finding> {
    let scans: [(&Regex, &str); 3] = [
        (&*DOLLAR_PAREN, "command substitution or subshell"),
        (&*BACKTICKS, "command substitution or subshell"),
        (&*PROCESS_SUBST, "process substitution"),
    ];
    scans
        .into_iter()
        .flat_map(|(re, label)| {
            re.find_iter(cmd).map(move |m| {
                Finding::new(
                    "subshell-command",
                    Severity::Warn,
                    m.as_str(),
                    format!("{label}: {}", m.as_str()),
                    m.start(),
                    "ensure substituted command is trusted",
                )
            })
        })
        .collect()
}
