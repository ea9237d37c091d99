//! Form definitions, field keys and submitted entries.

mod key;
mod models;

pub use key::*;
pub use models::*;
