use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::domain::errors::BuildResult;

/// Log level written into every generated document.
pub const DOCUMENT_LOG_LEVEL: &str = "info";

/// The YAML document consumed by the downstream application.
///
/// Field order here is the key order in the emitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub log_level: String,
    pub users: Vec<Account>,
}

impl ConfigDocument {
    /// Wrap an already sorted account list.
    pub fn new(users: Vec<Account>) -> Self {
        Self {
            log_level: DOCUMENT_LOG_LEVEL.to_string(),
            users,
        }
    }

    /// Serialize to YAML. Non-ASCII text is emitted as-is.
    pub fn to_yaml(&self) -> BuildResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
