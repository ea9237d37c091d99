//! Readable export values for nested form fields.
//!
//! A nested form field stores its value as a comma-separated list of child
//! entry IDs. During an export the host pipeline hands every raw field value
//! to a transform hook; [`ExportTransformer`] replaces the ID list with the
//! child entries' field labels and values and leaves every other field
//! untouched.
//!
//! Form and entry retrieval stays with the host platform, reached through
//! the [`FormStorage`] trait. Construct one transformer per export run:
//! form definitions are memoized for the run's lifetime, entries are
//! fetched fresh on every call.

pub mod export;
pub mod forms;
pub mod storage;

pub use export::{ExportOptions, ExportTransformer, FormCache, MissingEntryPolicy};
pub use forms::{Entry, EntryId, Field, FieldId, FieldKey, FieldKind, Form, FormId};
pub use storage::{FormStorage, MemoryStorage};
