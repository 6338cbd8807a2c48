//! Convert a JSON list of sales records into SQL `insert` statements.
//!
//! Pipeline: [`loader::load`] → [`emit::show`] / [`emit::emit`], with
//! [`format::values`] rendering each record's SQL value list.
pub mod record;
pub mod loader;
pub mod format;
pub mod emit;
pub mod error;
pub mod cli;

pub use error::{Error, Result};
pub use record::{Column, Record, RecordCollection};
