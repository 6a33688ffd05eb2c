//! Decoding of the bulk account list.
//!
//! Two layouts are accepted:
//!
//! ```json
//! [{"alice": "tok1"}]                          // compact
//! [{"nickname": "alice", "token": "tok1"}]     // explicit
//! ```
//!
//! Compact is tried first, so an array of single-key objects is always
//! read as compact.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use super::account::{AccountSource, Candidate, ACCOUNTS_JSON_VAR};
use crate::domain::errors::{BuildError, BuildResult};

/// Decoded bulk payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BulkPayload {
    Compact(Vec<CompactEntry>),
    Explicit(Vec<ExplicitEntry>),
}

/// `{"<nickname>": "<token>"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactEntry {
    pub nickname: String,
    pub token: String,
}

/// `{"nickname": ..., "token": ...}`; both keys must be present, either
/// may be `null`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExplicitEntry {
    #[serde(deserialize_with = "nullable_string")]
    pub nickname: Option<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub token: Option<String>,
}

// A custom `deserialize_with` makes serde report a missing key instead of
// silently defaulting the Option to None.
fn nullable_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

impl<'de> Deserialize<'de> for CompactEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = CompactEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with exactly one nickname key")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let Some((nickname, token)) = map.next_entry::<String, Option<String>>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                if map.next_key::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "compact account entries must have exactly one key",
                    ));
                }
                Ok(CompactEntry {
                    nickname,
                    token: token.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

impl BulkPayload {
    /// Decode the raw value of the bulk variable.
    pub fn parse(raw: &str) -> BuildResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|error| BuildError::MalformedJson {
                source_var: ACCOUNTS_JSON_VAR,
                error,
            })?;

        if !value.is_array() {
            return Err(BuildError::NotAnArray {
                source_var: ACCOUNTS_JSON_VAR,
                found: json_kind(&value),
            });
        }

        Self::deserialize(&value).map_err(|_| BuildError::InvalidShape {
            source_var: ACCOUNTS_JSON_VAR,
            detail: shape_mismatch(&value),
        })
    }

    pub const fn source(&self) -> AccountSource {
        match self {
            Self::Compact(_) => AccountSource::BulkCompact,
            Self::Explicit(_) => AccountSource::BulkExplicit,
        }
    }

    /// Number of entries in the payload.
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Compact(entries) => entries.len(),
            Self::Explicit(entries) => entries.len(),
        }
    }

    /// Flatten into candidates, preserving input order.
    pub fn into_candidates(self) -> Vec<Candidate> {
        let source = self.source();
        match self {
            Self::Compact(entries) => entries
                .into_iter()
                .map(|entry| Candidate {
                    source,
                    nickname: entry.nickname,
                    token: entry.token,
                })
                .collect(),
            Self::Explicit(entries) => entries
                .into_iter()
                .map(|entry| Candidate {
                    source,
                    nickname: entry.nickname.unwrap_or_default(),
                    token: entry.token.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Describe why an array failed to decode as either layout.
fn shape_mismatch(value: &Value) -> String {
    let elements = value.as_array().map_or(&[][..], Vec::as_slice);

    for (index, element) in elements.iter().enumerate() {
        let compact = CompactEntry::deserialize(element).is_ok();
        let explicit = ExplicitEntry::deserialize(element).is_ok();
        if !compact && !explicit {
            return format!(
                "element {index} is {}, expected a single-key object or an object with nickname and token",
                json_kind(element)
            );
        }
    }

    "elements mix the compact and explicit formats".to_string()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
