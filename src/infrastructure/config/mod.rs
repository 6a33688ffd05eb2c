//! Configuration management infrastructure
//!
//! Hierarchical settings for the builder itself using figment:
//! - Programmatic defaults
//! - Optional YAML settings file
//! - Environment variable overrides
//! - Command-line overrides
//! - Validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, SettingsOverrides, ENV_PREFIX};
