//! Per-run memoization of form definition lookups.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use crate::forms::{Form, FormId};
use crate::storage::FormStorage;

/// Memoizes form lookups for the duration of one export run.
///
/// Construct one cache per run and discard it afterwards. There is no
/// eviction: a fetched form is treated as immutable until the run ends.
/// Not synchronized; the host invokes the export hook sequentially.
#[derive(Debug)]
pub struct FormCache<S> {
    storage: S,
    forms: HashMap<FormId, Arc<Form>>,
}

impl<S: FormStorage> FormCache<S> {
    pub fn new(storage: S) -> Self {
        FormCache {
            storage,
            forms: HashMap::new(),
        }
    }

    /// The underlying storage, for lookups the cache does not cover.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Fetch a form, hitting storage only on the first call per ID.
    ///
    /// A storage failure is returned and nothing is cached for that ID, so
    /// a later call retries the fetch.
    pub fn get_form(&mut self, form_id: FormId) -> Result<Arc<Form>> {
        if let Some(form) = self.forms.get(&form_id) {
            log::debug!("form {} served from cache", form_id);
            return Ok(Arc::clone(form));
        }

        let form = Arc::new(self.storage.get_form(form_id)?);
        log::debug!("form {} fetched and cached", form_id);
        self.forms.insert(form_id, Arc::clone(&form));
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::storage::MemoryStorage;

    struct CountingStorage {
        inner: MemoryStorage,
        form_fetches: Cell<usize>,
    }

    impl CountingStorage {
        fn new(inner: MemoryStorage) -> Self {
            CountingStorage {
                inner,
                form_fetches: Cell::new(0),
            }
        }
    }

    impl FormStorage for CountingStorage {
        fn get_form(&self, form_id: FormId) -> Result<Form> {
            self.form_fetches.set(self.form_fetches.get() + 1);
            self.inner.get_form(form_id)
        }

        fn get_entry(&self, entry_id: crate::forms::EntryId) -> Result<crate::forms::Entry> {
            self.inner.get_entry(entry_id)
        }
    }

    fn form(id: FormId, title: &str) -> Form {
        Form {
            id,
            title: title.into(),
            fields: vec![],
        }
    }

    #[test]
    fn test_fetches_once_per_form_id() {
        let mut storage = MemoryStorage::new();
        storage.insert_form(form(1, "Parents"));
        storage.insert_form(form(2, "Pets"));

        let mut cache = FormCache::new(CountingStorage::new(storage));

        assert_eq!(cache.get_form(1).unwrap().title, "Parents");
        assert_eq!(cache.get_form(1).unwrap().title, "Parents");
        assert_eq!(cache.get_form(2).unwrap().title, "Pets");
        assert_eq!(cache.get_form(2).unwrap().title, "Pets");

        assert_eq!(cache.storage().form_fetches.get(), 2);
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let mut cache = FormCache::new(CountingStorage::new(MemoryStorage::new()));

        assert!(cache.get_form(1).is_err());
        assert!(cache.get_form(1).is_err());

        // Both calls reached storage; an error never pins the cache entry.
        assert_eq!(cache.storage().form_fetches.get(), 2);
    }
}
