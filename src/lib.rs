//! preexec: inspect shell commands before they run.
//!
//! The detection engine flags Unicode homoglyphs, zero-width and BiDi
//! characters, terminal escape sequences and common injection or
//! persistence idioms, and ranks the result as pass, warn or block.
//! A companion rewriter strips the hidden parts of a command.

pub mod cli;
pub mod config;
pub mod detection;
pub mod hook;
pub mod logging;
pub mod rewrite;
pub mod urls;

pub use detection::{run, Finding, Rule, RuleConfig, ScanResult, Severity};
