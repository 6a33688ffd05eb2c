//! Implementation of the config build run.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::BuildArgs;
use crate::domain::models::{Settings, SkippedAccount};
use crate::infrastructure::{write_atomically, AccountInputs};
use crate::services::{BuildReport, ConfigBuilder};

/// Summary of a successful run. Failures never reach this type; they are
/// reported by `cli::handle_error`.
#[derive(Debug, Serialize)]
pub struct BuildOutput {
    pub accounts: usize,
    pub skipped: Vec<SkippedAccount>,
    pub output_path: PathBuf,
}

impl CommandOutput for BuildOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "All accounts merged: {} account(s) written to {}",
            self.accounts,
            self.output_path.display()
        )];
        if !self.skipped.is_empty() {
            lines.push(format!("\nSkipped {} account(s):", self.skipped.len()));
            for skip in &self.skipped {
                let nickname = if skip.nickname.is_empty() {
                    "<unnamed>"
                } else {
                    skip.nickname.as_str()
                };
                lines.push(format!("  - {} from {} source ({})", nickname, skip.source, skip.reason));
            }
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        // shared key with the failure body emitted by handle_error
        value["success"] = serde_json::Value::Bool(true);
        Ok(value)
    }
}

/// Outcome of one build run.
#[derive(Debug, Clone)]
pub struct BuildRun {
    pub report: BuildReport,
    pub yaml: String,
    /// Path written, `None` on a dry run
    pub written_to: Option<PathBuf>,
}

/// Build the config from the process environment and emit it.
pub fn execute(args: &BuildArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let inputs = AccountInputs::from_env()?;
    let run = run_build(&inputs, settings, args.dry_run)?;

    match run.written_to {
        Some(output_path) => output(
            &BuildOutput {
                accounts: run.report.document.users.len(),
                skipped: run.report.skipped,
                output_path,
            },
            json_mode,
        ),
        // stdout carries the document itself
        None => {
            print!("{}", run.yaml);
            Ok(())
        }
    }
}

/// Build the document and, unless `dry_run` is set, write it atomically.
pub fn run_build(inputs: &AccountInputs, settings: &Settings, dry_run: bool) -> Result<BuildRun> {
    let report = ConfigBuilder::new(settings.naming.clone()).build(inputs)?;
    let yaml = report.document.to_yaml()?;

    if dry_run {
        info!(accounts = report.document.users.len(), "dry run, not writing output");
        return Ok(BuildRun {
            report,
            yaml,
            written_to: None,
        });
    }

    let path = PathBuf::from(&settings.output_path);
    write_atomically(&path, &yaml)?;
    info!(
        accounts = report.document.users.len(),
        path = %path.display(),
        "config file generated"
    );
    Ok(BuildRun {
        report,
        yaml,
        written_to: Some(path),
    })
}
