use tracing::{info, instrument};

use super::account_merger::AccountMerger;
use crate::domain::errors::BuildResult;
use crate::domain::models::{BulkPayload, ConfigDocument, NamingConfig, SkippedAccount};
use crate::infrastructure::env::AccountInputs;

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub document: ConfigDocument,
    pub skipped: Vec<SkippedAccount>,
}

/// Turns raw account inputs into a sorted config document.
///
/// Sources are read in a fixed order: the bulk JSON list first, then the
/// standalone pair. Building does no I/O.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    naming: NamingConfig,
}

impl ConfigBuilder {
    pub const fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }

    #[instrument(skip(self, inputs), fields(
        has_bulk = inputs.accounts_json.is_some(),
        has_token = inputs.token.is_some(),
    ))]
    pub fn build(&self, inputs: &AccountInputs) -> BuildResult<BuildReport> {
        let mut merger = AccountMerger::new(self.naming.clone());

        if let Some(raw) = inputs.accounts_json.as_deref() {
            let payload = BulkPayload::parse(raw)?;
            let source = payload.source();
            let entries = payload.entry_count();
            let accepted = merger.offer_bulk(payload.into_candidates());
            info!(%source, entries, accepted, "loaded bulk accounts");
        }

        if let Some(token) = inputs.token.as_deref() {
            let nickname = inputs.nickname.as_deref().unwrap_or_default();
            if merger.offer_standalone(token, nickname) {
                info!("loaded standalone account");
            }
        }

        let outcome = merger.finish()?;
        info!(
            accounts = outcome.accounts.len(),
            skipped = outcome.skipped.len(),
            "accounts merged"
        );

        Ok(BuildReport {
            document: ConfigDocument::new(outcome.accounts),
            skipped: outcome.skipped,
        })
    }
}
