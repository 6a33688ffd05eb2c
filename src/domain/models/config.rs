use serde::{Deserialize, Serialize};

/// Settings for the config builder itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Path of the generated YAML file
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Nickname handling
    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_output_path() -> String {
    "config.yaml".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            logging: LoggingConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty or compact
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Nickname normalization and placeholder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NamingConfig {
    /// Trailing tag stripped from the standalone nickname
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Prefix for numbered placeholders of unnamed bulk accounts
    #[serde(default = "default_prefix")]
    pub default_prefix: String,

    /// Placeholder for an unnamed standalone account
    #[serde(default = "default_standalone_placeholder")]
    pub standalone_placeholder: String,
}

fn default_marker() -> String {
    "_END".to_string()
}

fn default_prefix() -> String {
    "未命名账号".to_string()
}

fn default_standalone_placeholder() -> String {
    "未命名账号-独立".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            default_prefix: default_prefix(),
            standalone_placeholder: default_standalone_placeholder(),
        }
    }
}
