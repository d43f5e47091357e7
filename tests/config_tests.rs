//! Config file parsing, defaults and rule policy.

use preexec::config::{Config, ConfigError};
use preexec::detection::{self, Rule, RuleConfig, Severity};
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.mode, Severity::Warn);
    assert!(config.confirm_on_warn);
    assert!(config.ascii_only_domains);
    assert!(config.is_allowed_domain("github.com"));
    assert!(config.is_denied_domain("bit.ly"));
    assert_eq!(config.rules.len(), Rule::ALL.len());
}

#[test]
fn default_config_survives_toml() {
    let config = Config::default();
    let text = config.to_toml().unwrap();
    assert!(text.contains("mode = \"warn\""));
    assert!(text.contains("pipe_to_shell = true"));
    assert_eq!(Config::from_toml(&text).unwrap(), config);
}

#[test]
fn partial_rules_table_keeps_other_rules_enabled() {
    let config = Config::from_toml("[rules]\npipe_to_shell = false\n").unwrap();
    assert!(!config.enabled("pipe_to_shell"));
    assert!(config.enabled("zero_width"));
    assert_eq!(config.rules.get("subshell_command"), Some(&true));

    let result = detection::run("curl https://bit.ly/x | sh", &config);
    let ids: Vec<&str> = result.findings().iter().map(|f| f.rule_id()).collect();
    assert_eq!(ids, ["shortener-domains"]);
}

#[test]
fn empty_file_is_the_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn invalid_mode_is_rejected() {
    let err = Config::from_toml("mode = \"panic\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().contains("invalid mode: panic"));
}

#[test]
fn domain_lists_are_case_insensitive() {
    let config = Config::from_toml(
        "[allow]\ndomains = [\"Example.COM\"]\n[deny]\ndomains = [\"evil.io\"]\n",
    )
    .unwrap();
    assert!(config.is_allowed_domain("example.com"));
    assert!(config.is_denied_domain("EVIL.IO"));
    assert!(!config.is_denied_domain("bit.ly"));
}

#[test]
fn from_file_reads_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "mode = \"block\"\nconfirm_on_warn = false\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.mode, Severity::Block);
    assert!(!config.confirm_on_warn);
}

#[test]
fn from_file_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn load_or_default_falls_back() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.toml");
    assert_eq!(Config::load_or_default(Some(&missing)), Config::default());

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "mode = [not toml").unwrap();
    assert_eq!(Config::load_or_default(Some(&broken)), Config::default());

    let good = dir.path().join("good.toml");
    fs::write(&good, "[rules]\nzero_width = false\n").unwrap();
    assert!(!Config::load_or_default(Some(&good)).enabled("zero_width"));
}

#[test]
fn default_path_ends_in_preexec_config() {
    let path = Config::default_config_path();
    assert!(path.ends_with("preexec/config.toml"));
}
