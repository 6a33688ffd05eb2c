//! skland-config - Skland account config builder
//!
//! Merges account credentials supplied through environment variables into
//! the single YAML file read by the Skland sign-in application:
//!
//! - `SKLAND_ACCOUNTS_JSON`: a JSON list of accounts, compact
//!   (`[{"nickname": "token"}]`) or explicit
//!   (`[{"nickname": "...", "token": "..."}]`)
//! - `SKLAND_TOKEN` / `SKLAND_NICKNAME`: one standalone account
//!
//! Accounts are deduplicated by token (the bulk list wins), unnamed
//! accounts get placeholder nicknames, and the result is sorted by
//! nickname and written atomically.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): account types, payload decoding, errors
//! - **Service Layer** (`services`): merging and document building
//! - **Infrastructure Layer** (`infrastructure`): environment, settings,
//!   logging and file output
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use skland_config::{AccountInputs, ConfigBuilder};
//!
//! let inputs = AccountInputs {
//!     accounts_json: Some(r#"[{"alice": "tok1"}, {"": "tok2"}]"#.to_string()),
//!     ..Default::default()
//! };
//! let report = ConfigBuilder::default().build(&inputs).unwrap();
//! assert_eq!(report.document.users.len(), 2);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{BuildError, BuildResult};
pub use domain::models::{
    Account, AccountSource, BulkPayload, ConfigDocument, NamingConfig, Settings, SkipReason,
    SkippedAccount,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::{write_atomically, AccountInputs};
pub use services::{AccountMerger, BuildReport, ConfigBuilder};
