//! Domain models for accounts, the bulk payload and the generated document.

pub mod account;
pub mod bulk;
pub mod config;
pub mod document;

pub use account::{
    Account, AccountSource, Candidate, SkipReason, SkippedAccount, ACCOUNTS_JSON_VAR,
    NICKNAME_VAR, TOKEN_VAR,
};
pub use bulk::{BulkPayload, CompactEntry, ExplicitEntry};
pub use config::{LoggingConfig, NamingConfig, Settings};
pub use document::{ConfigDocument, DOCUMENT_LOG_LEVEL};
