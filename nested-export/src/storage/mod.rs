//! The seam to the host platform's form and entry storage.

mod memory;

pub use memory::MemoryStorage;

use anyhow::Result;

use crate::forms::{Entry, EntryId, Form, FormId};

/// Host storage for form definitions and submitted entries.
///
/// Calls are synchronous: the export pipeline invokes the transform hook
/// sequentially and each call completes before the next begins. Failures
/// carry context via `anyhow`; the export components absorb them into
/// pass-through or blank output rather than surfacing them to the host.
pub trait FormStorage {
    /// Fetch a form definition by ID.
    fn get_form(&self, form_id: FormId) -> Result<Form>;

    /// Fetch a submitted entry by ID.
    fn get_entry(&self, entry_id: EntryId) -> Result<Entry>;
}
