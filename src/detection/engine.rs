//! Runs the rule set over a command and aggregates the findings.

use crate::detection::finding::{Finding, Severity};
use crate::detection::rules::{Rule, RuleConfig};
use serde::Serialize;
use tracing::{debug, trace};

/// Inspect `command` with every enabled rule.
///
/// Findings are ordered by rule (see [`Rule::ALL`]) and then by match
/// order within the rule. They are not sorted by position.
pub fn run(command: &str, config: &dyn RuleConfig) -> ScanResult {
    let mut findings = Vec::new();
    for rule in Rule::ALL {
        let hits = rule.check(command, config);
        if !hits.is_empty() {
            trace!(rule = rule.id(), count = hits.len(), "Rule matched");
        }
        findings.extend(hits);
    }
    let result = ScanResult::new(findings);
    debug!(
        severity = %result.severity(),
        finding_count = result.findings().len(),
        command_bytes = command.len(),
        "Command inspected"
    );
    result
}

/// Outcome of inspecting one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    findings: Vec<Finding>,
    severity: Severity,
}

impl ScanResult {
    /// Wrap findings and derive the aggregate severity.
    pub fn new(findings: Vec<Finding>) -> Self {
        let severity = Severity::worst(&findings);
        Self { findings, severity }
    }

    /// Findings in rule order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Highest severity among the findings, `Pass` if there are none.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Process exit code for this result (0, 10 or 20).
    pub fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings produced by one rule.
    pub fn by_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.rule_id() == rule_id)
    }

    /// Human-readable block per finding, in the `key: value` layout
    /// printed by `preexec check`.
    pub fn report(&self) -> String {
        let mut report = String::new();
        for f in &self.findings {
            report.push_str(&format!(
                "{} {}\n token: {}\n issue: {}\n position: {}\n suggestion: {}\n\n",
                f.severity(),
                f.rule_id(),
                f.token(),
                f.issue(),
                f.position(),
                f.suggestion()
            ));
        }
        report
    }

    /// Machine-readable form used by `--format json`.
    pub fn to_json(&self) -> JsonReport<'_> {
        JsonReport {
            severity: self.severity,
            exit_code: self.exit_code(),
            findings: &self.findings,
        }
    }
}

/// Serializable view of a [`ScanResult`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub severity: Severity,
    pub exit_code: u8,
    #[serde(skip_serializing_if = "no_findings")]
    pub findings: &'a [Finding],
}

fn no_findings(findings: &&[Finding]) -> bool {
    findings.is_empty()
}
