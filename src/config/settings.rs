//! Configuration management for preexec.

use crate::detection::rules::{Rule, RuleConfig};
use crate::detection::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enforcement mode shell wrappers apply on top of the exit code
    #[serde(with = "mode_serde")]
    pub mode: Severity,
    /// Ask before running a command that produced warnings
    pub confirm_on_warn: bool,
    /// Treat non-ASCII hosts as suspicious
    pub ascii_only_domains: bool,
    pub allow: DomainList,
    pub deny: DomainList,
    /// Rule config key -> enabled
    pub rules: BTreeMap<String, bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Severity::Warn,
            confirm_on_warn: true,
            ascii_only_domains: true,
            allow: DomainList::new(&["github.com", "raw.githubusercontent.com"]),
            deny: DomainList::new(&["bit.ly", "tinyurl.com"]),
            rules: default_rules(),
        }
    }
}

fn default_rules() -> BTreeMap<String, bool> {
    Rule::ALL
        .iter()
        .map(|r| (r.config_key().to_string(), true))
        .collect()
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Rules absent from the file keep their default (enabled).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        for (key, enabled) in default_rules() {
            config.rules.entry(key).or_insert(enabled);
        }
        Ok(config)
    }

    /// Load `path` (or the default location), falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or invalid one is logged.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "Config loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("preexec")
            .join("config.toml")
    }

    /// Check if a domain is in the allow list.
    pub fn is_allowed_domain(&self, domain: &str) -> bool {
        self.allow.contains(domain)
    }

    /// Check if a domain is in the deny list.
    pub fn is_denied_domain(&self, domain: &str) -> bool {
        self.deny.contains(domain)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl RuleConfig for Config {
    fn enabled(&self, rule: &str) -> bool {
        self.rules.get(rule).copied().unwrap_or(true)
    }
}

/// A list of domains, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DomainList {
    pub domains: Vec<String>,
}

impl DomainList {
    fn new(domains: &[&str]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d.eq_ignore_ascii_case(domain))
    }
}

/// Serde helper for `mode`, rejecting unknown values with a clear message.
mod mode_serde {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(mode: &Severity, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        mode.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Severity, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid mode: {}", s)))
    }

    pub(super) fn parse(s: &str) -> Option<Severity> {
        match s.to_lowercase().as_str() {
            "pass" => Some(Severity::Pass),
            "warn" => Some(Severity::Warn),
            "block" => Some(Severity::Block),
            _ => None,
        }
    }
}
