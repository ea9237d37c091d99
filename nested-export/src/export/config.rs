//! Options for the export transform.

/// Options for [`ExportTransformer`](super::ExportTransformer).
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Trim whitespace around the comma-separated child entry IDs before
    /// parsing, so a stored value like `"5, 7"` resolves both entries.
    pub trim_entry_ids: bool,
    /// How to render a child entry that cannot be fetched.
    pub missing_entry: MissingEntryPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            trim_entry_ids: true,
            missing_entry: MissingEntryPolicy::BlankValues,
        }
    }
}

/// Rendering policy for a child entry ID whose entry cannot be fetched,
/// including IDs that do not parse as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntryPolicy {
    /// Render every requested field label with an empty value, as if the
    /// entry existed but held nothing.
    BlankValues,
    /// Render the entry's block as an empty string. The title's entry
    /// count and the dividers between entries are unaffected.
    Skip,
}
