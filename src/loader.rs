//! Whole-document loading of `{"objects": [...]}` sales files.
use std::path::Path;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::{Record, RecordCollection};

#[derive(Debug, Deserialize)]
struct SalesDocument {
    objects: Vec<Record>,
}

/// Read `path` fully into memory and parse it.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn load(path: impl AsRef<Path>) -> Result<RecordCollection> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse(&String::from_utf8_lossy(&bytes))?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a sales document already in memory. All or nothing: one bad record
/// fails the whole document.
///
/// Goes through [`serde_json::Value`] first so a repeated key keeps its last
/// value instead of failing.
pub fn parse(source: &str) -> Result<RecordCollection> {
    let value = from_str_with_path::<Value>(source)?;
    let document = from_value_with_path::<SalesDocument>(value)?;
    Ok(RecordCollection::new(document.objects))
}

/// Deserialize with JSON-path context in error messages.
fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(path_error)
}

fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(path_error)
}

fn path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    Error::Parse {
        json_path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}
