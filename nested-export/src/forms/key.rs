//! Field identifier keys as they appear in export configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldId;

/// A field identifier key: a top-level field number like `"12"`, or a
/// decimal-dotted sub-field address like `"12.1"`.
///
/// The base ID (the integer before the first dot) drives label lookup
/// against the form definition; the raw string drives value lookup against
/// an entry. A key whose leading segment is not an integer has no base ID
/// and resolves by its raw string only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldKey {
    raw: String,
    base: Option<FieldId>,
}

impl FieldKey {
    /// Parse a key from its raw string form. Never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let base = raw
            .split('.')
            .next()
            .and_then(|segment| segment.parse::<FieldId>().ok());
        FieldKey { raw, base }
    }

    /// The key exactly as it appears in configuration and entry maps.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The top-level field number, if the key has one.
    pub fn base(&self) -> Option<FieldId> {
        self.base
    }

    /// The key a sub-field value falls back to: the base ID as a string.
    pub fn base_key(&self) -> Option<String> {
        self.base.map(|id| id.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(raw: String) -> Self {
        FieldKey::new(raw)
    }
}

impl From<&str> for FieldKey {
    fn from(raw: &str) -> Self {
        FieldKey::new(raw)
    }
}

impl From<FieldKey> for String {
    fn from(key: FieldKey) -> Self {
        key.raw
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
