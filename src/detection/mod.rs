pub mod engine;
pub mod finding;
pub mod rules;

// Re-export common types for convenience
pub use engine::{run, JsonReport, ScanResult};
pub use finding::{Finding, Severity};
pub use rules::{AllEnabled, Rule, RuleConfig, UnknownRule};
