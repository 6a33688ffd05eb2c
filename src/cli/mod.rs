//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{BuildArgs, Cli};

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::domain::errors::{BuildError, FAILURE_EXIT_CODE};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

/// Load settings, install logging and run the build.
///
/// Logging is set up from the loaded settings when they are valid and
/// from defaults otherwise, so settings errors are still reported.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = ConfigLoader::load(cli.args.settings.as_deref(), &cli.args.overrides());

    let mut log_config = settings
        .as_ref()
        .ok()
        .and_then(|settings| LogConfig::try_from(&settings.logging).ok())
        .unwrap_or_default();
    log_config.ansi = io::stderr().is_terminal();
    LoggerImpl::init(&log_config)?;

    let settings = settings?;
    commands::build::execute(&cli.args, &settings, cli.json)
}

/// Exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BuildError>()
        .map_or(FAILURE_EXIT_CODE, BuildError::exit_code)
}

/// Report a fatal error and terminate the process.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if tracing::dispatcher::has_been_set() {
        tracing::error!("{err:#}");
    } else {
        eprintln!("error: {err:#}");
    }

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{text}"),
            Err(json_err) => tracing::error!("Failed to format error output: {json_err}"),
        }
    }

    std::process::exit(exit_code(err));
}
