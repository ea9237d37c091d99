//! Rendering of a single child entry as label/value blocks.

use crate::forms::{Entry, EntryId, FieldKey, Form};
use crate::storage::FormStorage;

use super::config::{ExportOptions, MissingEntryPolicy};

/// Render one child entry as `label:\n value` blocks, one per requested
/// field key, joined by blank lines.
///
/// Keys render in caller order; duplicates render repeatedly. Every
/// failure mode degrades: a label falls back to the raw key, a missing
/// value renders empty, and an entry that cannot be fetched follows
/// `options.missing_entry`.
pub fn nested_entry_value<S: FormStorage>(
    storage: &S,
    entry_id: EntryId,
    field_keys: &[FieldKey],
    form: &Form,
    options: &ExportOptions,
) -> String {
    let entry = match storage.get_entry(entry_id) {
        Ok(entry) => entry,
        Err(err) => {
            log::debug!("entry {} unavailable: {:#}", entry_id, err);
            return missing_entry_value(field_keys, form, options.missing_entry);
        }
    };

    entry_blocks(&entry, field_keys, form)
}

/// Rendering for an entry that could not be fetched at all.
pub(super) fn missing_entry_value(
    field_keys: &[FieldKey],
    form: &Form,
    policy: MissingEntryPolicy,
) -> String {
    match policy {
        MissingEntryPolicy::BlankValues => entry_blocks(&Entry::default(), field_keys, form),
        MissingEntryPolicy::Skip => String::new(),
    }
}

fn entry_blocks(entry: &Entry, field_keys: &[FieldKey], form: &Form) -> String {
    let mut blocks = Vec::with_capacity(field_keys.len());

    for key in field_keys {
        let label = form.label_for(key).unwrap_or_else(|| key.as_str());
        let value = entry.value(key).unwrap_or("");
        blocks.push(format!("{}:\n {}", label, value));
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Field, FieldKind};
    use crate::storage::MemoryStorage;

    fn pets_form() -> Form {
        Form {
            id: 7,
            title: "Pets".into(),
            fields: vec![
                Field {
                    id: 1,
                    label: "Name".into(),
                    kind: FieldKind::Plain,
                },
                Field {
                    id: 2,
                    label: "Species".into(),
                    kind: FieldKind::Plain,
                },
            ],
        }
    }

    fn keys(raw: &[&str]) -> Vec<FieldKey> {
        raw.iter().map(|k| FieldKey::new(*k)).collect()
    }

    #[test]
    fn test_renders_blocks_in_key_order() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(
            Entry::new(5)
                .with_value("1", "Rex")
                .with_value("2", "Dog"),
        );

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["2", "1"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "Species:\n Dog\n\nName:\n Rex");
    }

    #[test]
    fn test_duplicate_keys_render_repeatedly() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(Entry::new(5).with_value("1", "Rex"));

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["1", "1"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "Name:\n Rex\n\nName:\n Rex");
    }

    #[test]
    fn test_unknown_key_uses_raw_key_as_label() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(Entry::new(5).with_value("99", "stray"));

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["99"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "99:\n stray");
    }

    #[test]
    fn test_sub_field_key_shares_label_but_reads_exact_key_first() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(
            Entry::new(5)
                .with_value("1", "whole")
                .with_value("1.2", "part"),
        );

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["1.2"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "Name:\n part");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(Entry::new(5).with_null("1"));

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["1"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "Name:\n ");
    }

    #[test]
    fn test_missing_entry_blank_values() {
        let storage = MemoryStorage::new();

        let out = nested_entry_value(
            &storage,
            5,
            &keys(&["1", "2"]),
            &pets_form(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "Name:\n \n\nSpecies:\n ");
    }

    #[test]
    fn test_missing_entry_skip() {
        let storage = MemoryStorage::new();
        let options = ExportOptions {
            missing_entry: MissingEntryPolicy::Skip,
            ..ExportOptions::default()
        };

        let out = nested_entry_value(&storage, 5, &keys(&["1", "2"]), &pets_form(), &options);
        assert_eq!(out, "");
    }

    #[test]
    fn test_empty_key_list_renders_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_entry(Entry::new(5));

        let out = nested_entry_value(&storage, 5, &[], &pets_form(), &ExportOptions::default());
        assert_eq!(out, "");
    }
}
