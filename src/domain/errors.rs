//! Domain errors for the config builder.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit status shared by every fatal condition.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Fatal errors that abort a build run.
///
/// Recoverable anomalies (empty or duplicate tokens) never show up here;
/// they are recorded as skipped accounts and processing continues.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{source_var} is not valid JSON: {error}")]
    MalformedJson {
        source_var: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("{source_var} is not valid UTF-8")]
    NotUnicode { source_var: &'static str },

    #[error("{source_var} must be a JSON array, found {found}")]
    NotAnArray {
        source_var: &'static str,
        found: &'static str,
    },

    #[error("{source_var} matches neither the compact nor the explicit account format: {detail}")]
    InvalidShape {
        source_var: &'static str,
        detail: String,
    },

    #[error("No valid account configuration found")]
    NoAccounts,

    #[error("Failed to serialize config document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Exit status the process should terminate with.
    pub const fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
