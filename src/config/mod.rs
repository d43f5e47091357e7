//! Persisted settings: rule toggles and domain lists.

pub mod settings;

pub use settings::{Config, ConfigError, DomainList};
