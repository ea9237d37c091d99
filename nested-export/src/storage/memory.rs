//! In-memory storage backend.

use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::forms::{Entry, EntryId, Form, FormId};

use super::FormStorage;

/// [`FormStorage`] backed by in-memory maps.
///
/// Suits hosts that materialize their forms up front; also the fixture
/// backend for this crate's tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    forms: HashMap<FormId, Form>,
    entries: HashMap<EntryId, Entry>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a form definition, keyed by its own ID.
    pub fn insert_form(&mut self, form: Form) {
        self.forms.insert(form.id, form);
    }

    /// Add or replace an entry, keyed by its own ID.
    pub fn insert_entry(&mut self, entry: Entry) {
        self.entries.insert(entry.id, entry);
    }
}

impl FormStorage for MemoryStorage {
    fn get_form(&self, form_id: FormId) -> Result<Form> {
        match self.forms.get(&form_id) {
            Some(form) => Ok(form.clone()),
            None => bail!("form {} not found", form_id),
        }
    }

    fn get_entry(&self, entry_id: EntryId) -> Result<Entry> {
        match self.entries.get(&entry_id) {
            Some(entry) => Ok(entry.clone()),
            None => bail!("entry {} not found", entry_id),
        }
    }
}
