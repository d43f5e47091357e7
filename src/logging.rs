//! Structured logging setup.
//!
//! Findings, rewritten commands and hook scripts go to stdout; diagnostics
//! go to stderr through `tracing` so shell wrappers can capture stdout
//! without noise.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable output
    Pretty,
    /// Structured JSON lines
    Json,
}

/// Errors from logging initialization.
#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Failed to parse log filter: {0}")]
    FilterError(String),

    #[error("Failed to set global subscriber: {0}")]
    SetGlobalError(String),
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: Level, format: LogFormat) -> Result<(), LogInitError> {
    let filter = build_env_filter(level, std::env::var("RUST_LOG").ok().as_deref())?;
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(registry.with(layer)),
        LogFormat::Json => tracing::subscriber::set_global_default(registry.with(layer.json())),
    };
    result.map_err(|e| LogInitError::SetGlobalError(e.to_string()))
}

fn build_env_filter(level: Level, env: Option<&str>) -> Result<EnvFilter, LogInitError> {
    let directive = match env {
        Some(directives) if !directives.trim().is_empty() => directives.to_string(),
        _ => level.to_string(),
    };
    EnvFilter::try_new(&directive).map_err(|e| LogInitError::FilterError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_used_without_env_override() {
        let filter = build_env_filter(Level::DEBUG, None).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "debug");
    }

    #[test]
    fn env_override_wins() {
        let filter = build_env_filter(Level::WARN, Some("preexec=trace")).unwrap();
        assert!(filter.to_string().contains("preexec=trace"));
    }

    #[test]
    fn blank_env_is_ignored() {
        let filter = build_env_filter(Level::INFO, Some("  ")).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "info");
    }

    #[test]
    fn invalid_directive_is_an_error() {
        assert!(matches!(
            build_env_filter(Level::INFO, Some("preexec=notalevel")),
            Err(LogInitError::FilterError(_))
        ));
    }
}
