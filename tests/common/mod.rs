//! Shared test utilities for preexec integration tests.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use preexec::detection::{self, AllEnabled, ScanResult};

/// Returns a `Command` for the `preexec` binary with colors off, no
/// `RUST_LOG`, and a config path that does not exist (so defaults apply).
#[allow(dead_code, deprecated)]
pub fn preexec_cmd() -> Command {
    let mut cmd = Command::cargo_bin("preexec").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("PREEXEC_CONFIG", "/nonexistent/preexec/config.toml")
        .arg("--color")
        .arg("never");
    cmd
}

/// Runs `preexec check -- <command>` and returns the `Assert`.
#[allow(dead_code)]
pub fn check(command: &str) -> Assert {
    preexec_cmd().args(["check", "--", command]).assert()
}

/// Runs the engine with every rule enabled.
#[allow(dead_code)]
pub fn inspect(command: &str) -> ScanResult {
    detection::run(command, &AllEnabled)
}

/// Rule ids of the findings, in reported order.
#[allow(dead_code)]
pub fn rule_ids(result: &ScanResult) -> Vec<&'static str> {
    result.findings().iter().map(|f| f.rule_id()).collect()
}

/// Every finding's position falls inside an occurrence of its token.
///
/// Some rules report the offending character but widen the token to the
/// surrounding word, so the token may begin before the position.
#[allow(dead_code)]
pub fn assert_positions_slice_tokens(command: &str, result: &ScanResult) {
    for f in result.findings() {
        let pos = f.position();
        assert!(
            command.is_char_boundary(pos),
            "{} position {} splits a char",
            f.rule_id(),
            pos
        );
        let covered = command
            .match_indices(f.token())
            .any(|(start, tok)| start <= pos && pos < start + tok.len().max(1));
        assert!(
            covered,
            "{} token {:?} does not cover byte {} of {:?}",
            f.rule_id(),
            f.token(),
            pos,
            command
        );
    }
}
