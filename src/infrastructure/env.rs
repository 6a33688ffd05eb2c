//! Account inputs read from the process environment.

use std::env::VarError;

use crate::domain::errors::{BuildError, BuildResult};
use crate::domain::models::{ACCOUNTS_JSON_VAR, NICKNAME_VAR, TOKEN_VAR};

/// Raw values of the three account variables.
///
/// A variable that is unset or empty is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInputs {
    pub accounts_json: Option<String>,
    pub token: Option<String>,
    pub nickname: Option<String>,
}

impl AccountInputs {
    /// Read the account variables from the process environment.
    ///
    /// A variable holding bytes that are not valid UTF-8 is fatal.
    pub fn from_env() -> BuildResult<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Read the account variables through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> BuildResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(BuildError::NotUnicode { source_var: name }),
        };
        Ok(Self {
            accounts_json: read(ACCOUNTS_JSON_VAR)?,
            token: read(TOKEN_VAR)?,
            nickname: read(NICKNAME_VAR)?,
        })
    }
}
