//! Built-in detectors.
//!
//! The rule set is closed: [`Rule::ALL`] lists every detector in the order
//! the engine runs them, and findings keep that order.

mod ansi;
mod persistence;
mod shell;
mod shortener;
mod subshell;
mod unicode;

pub(crate) use ansi::escape_sequence_end;
pub(crate) use unicode::{is_bidi_control, is_zero_width};

use crate::detection::finding::Finding;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Policy capability consulted before each rule runs.
///
/// Keys are the snake_case names returned by [`Rule::config_key`].
pub trait RuleConfig {
    /// Whether the named rule should run. Unknown names are enabled.
    fn enabled(&self, _rule: &str) -> bool {
        true
    }
}

/// Policy with every rule switched on.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEnabled;

impl RuleConfig for AllEnabled {}

impl RuleConfig for std::collections::HashMap<String, bool> {
    fn enabled(&self, rule: &str) -> bool {
        self.get(rule).copied().unwrap_or(true)
    }
}

impl RuleConfig for std::collections::BTreeMap<String, bool> {
    fn enabled(&self, rule: &str) -> bool {
        self.get(rule).copied().unwrap_or(true)
    }
}

/// One of the nine built-in detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    UnicodeHomoglyph,
    ZeroWidth,
    BidiControls,
    AnsiEscape,
    PipeToShell,
    DotfileWrite,
    PersistencePatterns,
    ShortenerDomains,
    SubshellCommand,
}

impl Rule {
    /// Every rule, in execution order.
    pub const ALL: [Rule; 9] = [
        Rule::UnicodeHomoglyph,
        Rule::ZeroWidth,
        Rule::BidiControls,
        Rule::AnsiEscape,
        Rule::PipeToShell,
        Rule::DotfileWrite,
        Rule::PersistencePatterns,
        Rule::ShortenerDomains,
        Rule::SubshellCommand,
    ];

    /// Stable identifier carried by findings.
    pub fn id(self) -> &'static str {
        match self {
            Rule::UnicodeHomoglyph => "unicode-homoglyph",
            Rule::ZeroWidth => "zero-width",
            Rule::BidiControls => "bidi-controls",
            Rule::AnsiEscape => "ansi-escape",
            Rule::PipeToShell => "pipe-to-shell",
            Rule::DotfileWrite => "dotfile-write",
            Rule::PersistencePatterns => "persistence-patterns",
            Rule::ShortenerDomains => "shortener-domains",
            Rule::SubshellCommand => "subshell-command",
        }
    }

    /// Key used to look the rule up in a [`RuleConfig`].
    pub fn config_key(self) -> &'static str {
        match self {
            Rule::UnicodeHomoglyph => "unicode_homoglyph",
            Rule::ZeroWidth => "zero_width",
            Rule::BidiControls => "bidi_controls",
            Rule::AnsiEscape => "ansi_escape",
            Rule::PipeToShell => "pipe_to_shell",
            Rule::DotfileWrite => "dotfile_write",
            Rule::PersistencePatterns => "persistence_patterns",
            Rule::ShortenerDomains => "shortener_domains",
            Rule::SubshellCommand => "subshell_command",
        }
    }

    /// One-line explanation shown by `preexec explain`.
    pub fn description(self) -> &'static str {
        match self {
            Rule::UnicodeHomoglyph => {
                "Detects mixed scripts and homoglyphs (e.g. Cyrillic 'а' vs Latin 'a') used to spoof domains or commands."
            }
            Rule::ZeroWidth => {
                "Detects zero-width and invisible Unicode (ZWSP, ZWJ, BOM) that can hide payloads."
            }
            Rule::BidiControls => {
                "Detects BiDi override characters (RLO, LRO, FSI, PDI) that can reorder text and hide content."
            }
            Rule::AnsiEscape => {
                "Detects ANSI escape sequences that can deceive the terminal or inject output."
            }
            Rule::PipeToShell => {
                "Flags curl|bash, wget|sh and similar patterns; suggests download-then-inspect."
            }
            Rule::DotfileWrite => {
                "Warns when a command writes to .bashrc, .zshrc, .profile, .ssh, or similar."
            }
            Rule::PersistencePatterns => {
                "Flags cron, systemd, launchd, and eval $(...) as potential persistence or code execution."
            }
            Rule::ShortenerDomains => {
                "Warns on URL shortener or redirect domains (e.g. bit.ly, tinyurl.com) in commands."
            }
            Rule::SubshellCommand => {
                "Flags $(), backticks, and <( ) process substitution as hidden command execution."
            }
        }
    }

    /// Run this rule against `cmd`, honouring the policy.
    pub fn check(self, cmd: &str, config: &dyn RuleConfig) -> Vec<Finding> {
        if !config.enabled(self.config_key()) {
            return Vec::new();
        }
        self.scan(cmd)
    }

    fn scan(self, cmd: &str) -> Vec<Finding> {
        match self {
            Rule::UnicodeHomoglyph => unicode::homoglyphs(cmd),
            Rule::ZeroWidth => unicode::zero_width(cmd),
            Rule::BidiControls => unicode::bidi_controls(cmd),
            Rule::AnsiEscape => ansi::escapes(cmd),
            Rule::PipeToShell => shell::pipe_to_shell(cmd),
            Rule::DotfileWrite => shell::dotfile_writes(cmd),
            Rule::PersistencePatterns => persistence::persistence(cmd),
            Rule::ShortenerDomains => shortener::shortener_urls(cmd),
            Rule::SubshellCommand => subshell::subshells(cmd),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a rule name matches no built-in rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    /// Accepts either the rule id or its config key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|r| r.id() == s || r.config_key() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Format a code point as four or more uppercase hex digits.
pub(crate) fn hex(c: char) -> String {
    format!("{:04X}", c as u32)
}
