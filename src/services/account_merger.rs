use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::errors::{BuildError, BuildResult};
use crate::domain::models::{
    Account, AccountSource, Candidate, NamingConfig, SkipReason, SkippedAccount,
};
use crate::infrastructure::logging::mask_token;

/// Trim surrounding whitespace, then strip one trailing marker if present.
pub fn normalize_nickname(raw: &str, marker: &str) -> String {
    let trimmed = raw.trim();
    if marker.is_empty() {
        return trimmed.to_string();
    }
    trimmed.strip_suffix(marker).unwrap_or(trimmed).to_string()
}

/// Accepted accounts of one run, sorted by nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub accounts: Vec<Account>,
    pub skipped: Vec<SkippedAccount>,
}

/// Merges candidates from all sources into one deduplicated list.
///
/// One merger is scoped to a single run: it owns the set of accepted
/// tokens and the counter for numbered placeholder nicknames. Candidates
/// must be offered in source priority order, because the first holder of
/// a token wins.
#[derive(Debug, Clone)]
pub struct AccountMerger {
    naming: NamingConfig,
    seen_tokens: HashSet<String>,
    accepted: Vec<Account>,
    skipped: Vec<SkippedAccount>,
    unnamed_counter: u32,
}

impl Default for AccountMerger {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}

impl AccountMerger {
    pub fn new(naming: NamingConfig) -> Self {
        Self {
            naming,
            seen_tokens: HashSet::new(),
            accepted: Vec::new(),
            skipped: Vec::new(),
            unnamed_counter: 0,
        }
    }

    /// Offer one candidate. Returns whether it was accepted.
    ///
    /// The placeholder counter only advances for accepted bulk candidates,
    /// so skipped entries never leave gaps in the numbering.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        let Candidate {
            source,
            nickname,
            token,
        } = candidate;

        if token.is_empty() {
            warn!(
                source = %source,
                field = "token",
                nickname = %nickname,
                "account has an empty token, skipping"
            );
            self.skip(source, SkipReason::EmptyToken, nickname);
            return false;
        }

        if self.seen_tokens.contains(&token) {
            warn!(
                source = %source,
                field = "token",
                nickname = %nickname,
                token = %mask_token(&token),
                "account token is already configured, skipping duplicate"
            );
            self.skip(source, SkipReason::DuplicateToken, nickname);
            return false;
        }

        let nickname = if nickname.is_empty() {
            let assigned = self.placeholder_for(source);
            warn!(
                source = %source,
                field = "nickname",
                assigned = %assigned,
                "account has no nickname, using placeholder"
            );
            assigned
        } else {
            nickname
        };

        debug!(source = %source, nickname = %nickname, "account accepted");
        self.seen_tokens.insert(token.clone());
        self.accepted.push(Account { nickname, token });
        true
    }

    /// Offer every bulk candidate in input order. Returns how many were accepted.
    pub fn offer_bulk(&mut self, candidates: impl IntoIterator<Item = Candidate>) -> usize {
        candidates
            .into_iter()
            .map(|candidate| self.offer(candidate))
            .filter(|accepted| *accepted)
            .count()
    }

    /// Offer the standalone pair. The raw nickname is normalized first.
    pub fn offer_standalone(&mut self, token: &str, raw_nickname: &str) -> bool {
        let nickname = normalize_nickname(raw_nickname, &self.naming.marker);
        self.offer(Candidate {
            source: AccountSource::Standalone,
            nickname,
            token: token.to_string(),
        })
    }

    /// Close the run: fail when nothing was accepted, otherwise sort.
    ///
    /// The sort is stable, so equal nicknames keep their insertion order.
    pub fn finish(self) -> BuildResult<MergeOutcome> {
        if self.accepted.is_empty() {
            return Err(BuildError::NoAccounts);
        }

        let mut accounts = self.accepted;
        accounts.sort_by(|a, b| a.nickname.cmp(&b.nickname));

        Ok(MergeOutcome {
            accounts,
            skipped: self.skipped,
        })
    }

    fn placeholder_for(&mut self, source: AccountSource) -> String {
        if source.is_bulk() {
            self.unnamed_counter += 1;
            format!("{}-{}", self.naming.default_prefix, self.unnamed_counter)
        } else {
            self.naming.standalone_placeholder.clone()
        }
    }

    fn skip(&mut self, source: AccountSource, reason: SkipReason, nickname: String) {
        self.skipped.push(SkippedAccount {
            source,
            reason,
            nickname,
        });
    }
}
