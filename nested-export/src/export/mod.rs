//! Export-time transformation of nested form field values.

mod cache;
mod config;
mod format;
mod transform;

pub use cache::FormCache;
pub use config::{ExportOptions, MissingEntryPolicy};
pub use format::nested_entry_value;
pub use transform::ExportTransformer;
