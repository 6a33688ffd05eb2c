use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::config::Settings;

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "SKLAND_BUILDER_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Output path cannot be empty")]
    EmptyOutputPath,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty, compact")]
    InvalidLogFormat(String),

    #[error("Default nickname prefix cannot be empty")]
    EmptyDefaultPrefix,

    #[error("Standalone placeholder cannot be empty")]
    EmptyStandalonePlaceholder,
}

/// Values supplied on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Settings file passed with `--settings` (optional)
    /// 3. Environment variables (`SKLAND_BUILDER_*`, nested keys split on `__`)
    /// 4. Command-line overrides
    ///
    /// The account variables themselves are not read here.
    pub fn load(settings_file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = settings_file {
            if !path.exists() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Settings = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if settings.output_path.trim().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty", "compact"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(
                settings.logging.format.clone(),
            ));
        }

        if settings.naming.default_prefix.is_empty() {
            return Err(ConfigError::EmptyDefaultPrefix);
        }

        if settings.naming.standalone_placeholder.is_empty() {
            return Err(ConfigError::EmptyStandalonePlaceholder);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output_path, "config.yaml");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "compact");
        assert_eq!(settings.naming.marker, "_END");
        assert_eq!(settings.naming.default_prefix, "未命名账号");
        assert_eq!(settings.naming.standalone_placeholder, "未命名账号-独立");
        ConfigLoader::validate(&settings).expect("Default settings should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
output_path: out/config.yaml
logging:
  level: debug
  format: json
naming:
  marker: _TAG
";

        let settings: Settings = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(settings.output_path, "out/config.yaml");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.naming.marker, "_TAG");
        assert_eq!(settings.naming.default_prefix, "未命名账号");

        ConfigLoader::validate(&settings).expect("Parsed settings should be valid");
    }

    #[test]
    fn test_validate_empty_output_path() {
        let settings = Settings {
            output_path: "  ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&settings).unwrap_err(),
            ConfigError::EmptyOutputPath
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();

        match ConfigLoader::validate(&settings).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "loud"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut settings = Settings::default();
        settings.logging.format = "xml".to_string();

        match ConfigLoader::validate(&settings).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            other => panic!("Expected InvalidLogFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_prefix() {
        let mut settings = Settings::default();
        settings.naming.default_prefix = String::new();

        assert!(matches!(
            ConfigLoader::validate(&settings).unwrap_err(),
            ConfigError::EmptyDefaultPrefix
        ));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "SKLAND_BUILDER_OUTPUT_PATH",
                "SKLAND_BUILDER_LOGGING__LEVEL",
                "SKLAND_BUILDER_LOGGING__FORMAT",
            ],
            || {
                let settings = ConfigLoader::load(None, &SettingsOverrides::default()).unwrap();
                assert_eq!(settings.output_path, "config.yaml");
                assert_eq!(settings.logging.level, "info");
            },
        );
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("SKLAND_BUILDER_OUTPUT_PATH", Some("from-env.yaml")),
                ("SKLAND_BUILDER_LOGGING__LEVEL", Some("debug")),
            ],
            || {
                let settings = ConfigLoader::load(None, &SettingsOverrides::default()).unwrap();
                assert_eq!(settings.output_path, "from-env.yaml");
                assert_eq!(settings.logging.level, "debug");
            },
        );
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "output_path: from-file.yaml\nlogging:\n  level: warn\n  format: json"
        )
        .unwrap();
        file.flush().unwrap();

        let overrides = SettingsOverrides {
            output_path: Some("from-cli.yaml".to_string()),
            ..Default::default()
        };

        temp_env::with_vars(
            [
                ("SKLAND_BUILDER_OUTPUT_PATH", None),
                ("SKLAND_BUILDER_LOGGING__LEVEL", Some("error")),
                ("SKLAND_BUILDER_LOGGING__FORMAT", None),
            ],
            || {
                let settings = ConfigLoader::load(Some(file.path()), &overrides).unwrap();

                assert_eq!(settings.output_path, "from-cli.yaml", "CLI should win");
                assert_eq!(settings.logging.level, "error", "Env should beat the file");
                assert_eq!(
                    settings.logging.format, "json",
                    "File value should persist when not overridden"
                );
            },
        );
    }

    #[test]
    fn test_missing_settings_file_fails() {
        let result = ConfigLoader::load(
            Some(Path::new("/nonexistent/skland-settings.yaml")),
            &SettingsOverrides::default(),
        );
        assert!(result.is_err());
    }
}
