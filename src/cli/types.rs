//! CLI type definitions
//!
//! This module contains the clap structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::infrastructure::config::loader::LoggingOverrides;
use crate::infrastructure::config::SettingsOverrides;

#[derive(Parser, Debug)]
#[command(name = "skland-config")]
#[command(
    about = "Merge Skland accounts from SKLAND_ACCOUNTS_JSON, SKLAND_TOKEN and SKLAND_NICKNAME into a YAML config",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub args: BuildArgs,

    /// Output the run summary in JSON format
    #[arg(short, long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// YAML file with builder settings
    #[arg(long, env = "SKLAND_BUILDER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Where to write the generated config (default: config.yaml)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, value_parser = ["json", "pretty", "compact"])]
    pub log_format: Option<String>,

    /// Print the generated YAML to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    /// Settings layer contributed by command-line flags.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            output_path: self.output.clone(),
            logging: LoggingOverrides {
                level: self.log_level.clone(),
                format: self.log_format.clone(),
            },
        }
    }
}
