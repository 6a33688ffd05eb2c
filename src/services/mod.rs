//! Service layer: merging candidates and building the config document.

pub mod account_merger;
pub mod config_builder;

pub use account_merger::{normalize_nickname, AccountMerger, MergeOutcome};
pub use config_builder::{BuildReport, ConfigBuilder};
