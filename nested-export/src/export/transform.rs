//! The export hook: replaces nested form ID lists with readable blocks.

use crate::forms::{Entry, EntryId, FieldId, FieldKind, FormId};
use crate::storage::FormStorage;

use super::cache::FormCache;
use super::config::ExportOptions;
use super::format::{missing_entry_value, nested_entry_value};

/// Divider appended after every child entry block except the last.
const ENTRY_DIVIDER: &str = "\n\n——";

/// Transforms export values for nested form fields.
///
/// Registered against the export pipeline's per-field-value hook. For every
/// field that is not a configured nested form field the stored value comes
/// back untouched, so the transform is a no-op on the vast majority of
/// invocations. Construct one transformer per export run; form definitions
/// are memoized across calls, entries are fetched fresh.
pub struct ExportTransformer<S: FormStorage> {
    cache: FormCache<S>,
    options: ExportOptions,
}

impl<S: FormStorage> ExportTransformer<S> {
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, ExportOptions::default())
    }

    pub fn with_options(storage: S, options: ExportOptions) -> Self {
        ExportTransformer {
            cache: FormCache::new(storage),
            options,
        }
    }

    /// The per-field-value hook.
    ///
    /// `value` is the stored export value for `field_id` on a parent entry
    /// of form `form_id`; for a nested form field that is a comma-separated
    /// list of child entry IDs. The parent entry itself arrives as the
    /// hook's fourth argument and is not consulted. The return value
    /// replaces the exported cell's text.
    pub fn transform(
        &mut self,
        value: &str,
        form_id: FormId,
        field_id: FieldId,
        _parent_entry: &Entry,
    ) -> String {
        if value.is_empty() {
            return value.to_string();
        }

        let form = match self.cache.get_form(form_id) {
            Ok(form) => form,
            Err(err) => {
                log::warn!(
                    "form {} unavailable, exporting field {} as stored: {:#}",
                    form_id,
                    field_id,
                    err
                );
                return value.to_string();
            }
        };

        let (child_form_id, child_fields) = match form.field(field_id).map(|f| &f.kind) {
            Some(FieldKind::NestedForm {
                child_form,
                child_fields,
            }) => (*child_form, child_fields),
            _ => return value.to_string(),
        };

        let child_form = match self.cache.get_form(child_form_id) {
            Ok(form) => form,
            Err(err) => {
                log::warn!(
                    "child form {} unavailable, exporting field {} as stored: {:#}",
                    child_form_id,
                    field_id,
                    err
                );
                return value.to_string();
            }
        };

        let ids: Vec<&str> = value.split(',').collect();
        let entry_count = ids.len();

        let mut blocks = Vec::with_capacity(entry_count);
        for (i, raw_id) in ids.iter().copied().enumerate() {
            let raw_id = if self.options.trim_entry_ids {
                raw_id.trim()
            } else {
                raw_id
            };

            let mut block = match raw_id.parse::<EntryId>() {
                Ok(entry_id) => nested_entry_value(
                    self.cache.storage(),
                    entry_id,
                    child_fields,
                    &child_form,
                    &self.options,
                ),
                Err(_) => {
                    log::debug!("child entry id {:?} is not numeric", raw_id);
                    missing_entry_value(child_fields, &child_form, self.options.missing_entry)
                }
            };

            if i < entry_count - 1 {
                block.push_str(ENTRY_DIVIDER);
            }
            blocks.push(block);
        }

        let title = if entry_count == 1 {
            format!("{} (1 entry)", child_form.title)
        } else {
            format!("{} ({} entries)", child_form.title, entry_count)
        };

        format!("{}\n\n{}", title, blocks.join("\n\n"))
    }

    /// Consume the transformer into a closure matching the pipeline's
    /// four-argument hook signature.
    pub fn into_hook(mut self) -> impl FnMut(&str, FormId, FieldId, &Entry) -> String {
        move |value, form_id, field_id, parent_entry| {
            self.transform(value, form_id, field_id, parent_entry)
        }
    }
}
