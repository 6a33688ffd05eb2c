use std::fmt;

use serde::{Deserialize, Serialize};

/// One account entry of the generated config.
///
/// `token` is the identity key; `nickname` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub nickname: String,
    pub token: String,
}

impl Account {
    pub fn new(nickname: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            token: token.into(),
        }
    }
}

/// Where a candidate account came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSource {
    /// Bulk variable, `[{"nickname": "token"}]` layout
    BulkCompact,
    /// Bulk variable, `[{"nickname": ..., "token": ...}]` layout
    BulkExplicit,
    /// Standalone token/nickname variables
    Standalone,
}

impl AccountSource {
    pub const fn is_bulk(self) -> bool {
        matches!(self, Self::BulkCompact | Self::BulkExplicit)
    }
}

impl fmt::Display for AccountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BulkCompact => write!(f, "bulk (compact format)"),
            Self::BulkExplicit => write!(f, "bulk (explicit format)"),
            Self::Standalone => write!(f, "standalone"),
        }
    }
}

/// An account as read from a source, before validation.
///
/// Empty strings mean "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: AccountSource,
    pub nickname: String,
    pub token: String,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    EmptyToken,
    DuplicateToken,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "empty token"),
            Self::DuplicateToken => write!(f, "duplicate token"),
        }
    }
}

/// Record of a candidate that was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAccount {
    pub source: AccountSource,
    pub reason: SkipReason,
    /// Nickname as supplied; empty when the source had none.
    pub nickname: String,
}

/// Environment variable carrying the bulk JSON account list.
pub const ACCOUNTS_JSON_VAR: &str = "SKLAND_ACCOUNTS_JSON";

/// Environment variable carrying the standalone token.
pub const TOKEN_VAR: &str = "SKLAND_TOKEN";

/// Environment variable carrying the standalone nickname.
pub const NICKNAME_VAR: &str = "SKLAND_NICKNAME";
