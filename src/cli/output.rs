//! Output formatting utilities for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) -> Result<()> {
    if json_mode {
        let value = result.to_json().context("Failed to serialize command output")?;
        let text =
            serde_json::to_string_pretty(&value).context("Failed to format command output")?;
        println!("{text}");
    } else {
        println!("{}", result.to_human());
    }
    Ok(())
}
