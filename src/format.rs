//! Record → SQL value list.
//!
//! The escaping here is deliberately minimal: only `'` is escaped (as `\'`).
//! Output is NOT safe against hostile input.
use crate::record::{Column, Record};

/// Wrap in single quotes, escaping embedded `'` as `\'`. Nothing else changes.
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "\\'"))
}

/// `''` becomes bare `null`; any other token passes through.
pub fn maybe_null(token: String) -> String {
    if token == "''" { "null".to_string() } else { token }
}

/// One column's SQL literal.
///
/// `id` is emitted raw. Only `date_sold` maps empty to `null`; every other
/// text column keeps `''`.
pub fn literal(column: Column, record: &Record) -> String {
    let raw = column.value(record);
    match column {
        Column::Id => raw.to_string(),
        Column::DateSold => maybe_null(single_quote(raw)),
        _ => single_quote(raw),
    }
}

/// `5, 'Retail Trainee', 'owen@example.com', ..., null`
pub fn values(record: &Record) -> String {
    Column::ALL
        .iter()
        .map(|column| literal(*column, record))
        .collect::<Vec<_>>()
        .join(", ")
}
