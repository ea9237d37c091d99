//! Form definition and entry models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::FieldKey;

/// Identifier of a form definition.
pub type FormId = u64;

/// Identifier of a submitted entry.
pub type EntryId = u64;

/// Identifier of a field within a form.
pub type FieldId = u64;

/// A form definition: a title and an ordered list of fields.
///
/// Fetched once per export run and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Form {
    /// Resolve a single field definition by ID.
    pub fn field(&self, field_id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// The display label for a field key: the first field whose ID matches
    /// the key's base and whose label is non-empty. A field defined with an
    /// empty label is skipped so a later definition can still supply one.
    pub fn label_for(&self, key: &FieldKey) -> Option<&str> {
        let base = key.base()?;
        self.fields
            .iter()
            .find(|f| f.id == base && !f.label.is_empty())
            .map(|f| f.label.as_str())
    }
}

/// A single field definition within a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    /// Display label. May be empty, in which case export output falls back
    /// to the raw field key.
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// What a field holds.
///
/// A field configured for nesting always carries both the child form
/// reference and the child field keys to export. Anything else, including
/// a nested-type field missing part of its configuration, is `Plain` and
/// passes through the export transform untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// A nested form field: its stored value is a comma-separated list of
    /// child entry IDs.
    NestedForm {
        child_form: FormId,
        child_fields: Vec<FieldKey>,
    },
    /// Any field type the export transform does not touch.
    #[serde(other)]
    Plain,
}

/// A submitted entry: stored values keyed by field-key strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Raw stored values. Sub-field values sit under their exact dotted
    /// key (`"12.1"`); top-level values may sit under the bare number.
    #[serde(default)]
    pub values: HashMap<String, Option<String>>,
}

impl Entry {
    pub fn new(id: EntryId) -> Self {
        Entry {
            id,
            values: HashMap::new(),
        }
    }

    /// Set a stored value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Some(value.into()));
        self
    }

    /// Store an explicit null for a key.
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.values.insert(key.into(), None);
        self
    }

    /// Look up the stored value for a field key: the exact key first, then
    /// the key's base number. A stored null reads the same as a missing
    /// key, so a null sub-field value still falls back to the base key.
    pub fn value(&self, key: &FieldKey) -> Option<&str> {
        if let Some(Some(value)) = self.values.get(key.as_str()) {
            return Some(value.as_str());
        }

        let base = key.base_key()?;
        match self.values.get(&base) {
            Some(Some(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}
