//! Severity classification and the finding value type shared by all rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory severity of a finding or of a whole check.
///
/// Discriminants are the process exit codes used by every driver
/// (interactive check, file scan, history scan, git hook, shell hook).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// Nothing suspicious; run the command
    #[default]
    Pass = 0,
    /// Suspicious; ask the user to confirm
    Warn = 10,
    /// Hidden or reordering characters; refuse to run
    Block = 20,
}

impl Severity {
    /// Exit code a driver reports for this severity.
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    /// Uppercase label used in human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warn => "WARN",
            Severity::Block => "BLOCK",
        }
    }

    /// Highest severity among `findings`, or `Pass` when empty.
    pub fn worst(findings: &[Finding]) -> Self {
        findings
            .iter()
            .map(|f| f.severity)
            .max()
            .unwrap_or(Severity::Pass)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rule hit.
///
/// `position` is the byte offset of the offending text in the inspected
/// command. Word-level rules widen `token` to the surrounding word, so the
/// token may start before `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    rule_id: &'static str,
    severity: Severity,
    #[serde(skip_serializing_if = "String::is_empty")]
    token: String,
    issue: String,
    position: usize,
    #[serde(skip_serializing_if = "is_blank")]
    suggestion: &'static str,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        rule_id: &'static str,
        severity: Severity,
        token: impl Into<String>,
        issue: impl Into<String>,
        position: usize,
        suggestion: &'static str,
    ) -> Self {
        Self {
            rule_id,
            severity,
            token: token.into(),
            issue: issue.into(),
            position,
            suggestion,
        }
    }

    /// Identifier of the rule that produced this finding.
    pub fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The offending substring of the input.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Human-readable description of the problem.
    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// Byte offset of the token in the original input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Suggested remediation.
    pub fn suggestion(&self) -> &'static str {
        self.suggestion
    }
}

fn is_blank(s: &&'static str) -> bool {
    s.is_empty()
}
