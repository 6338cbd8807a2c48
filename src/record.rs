//! Sales record model and the fixed JSON key → SQL column table.
use std::fmt;
use serde::{Deserialize, Deserializer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// One sales entry. Every field is a string; absent or `null` keys read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "ID", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "JobTitle", default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(rename = "EmailAddress", default, deserialize_with = "null_as_empty")]
    pub email_address: String,
    #[serde(rename = "FirstNameLastName", default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(rename = "subCategory", default, deserialize_with = "null_as_empty")]
    pub sub_category: String,
    #[serde(rename = "result", default, deserialize_with = "null_as_empty")]
    pub result: String,
    #[serde(rename = "dateSold", default, deserialize_with = "null_as_empty")]
    pub date_sold: String,
}

/// The seven output columns, in SQL order.
///
/// This is the single place that ties a JSON key to a SQL column name; the
/// serde renames on [`Record`] must agree with [`Column::json_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    JobTitle,
    EmailAddress,
    FullName,
    SubCategory,
    Result,
    DateSold,
}

/// Records in input document order. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<Record>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::JobTitle,
        Column::EmailAddress,
        Column::FullName,
        Column::SubCategory,
        Column::Result,
        Column::DateSold,
    ];

    pub fn json_key(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::JobTitle => "JobTitle",
            Column::EmailAddress => "EmailAddress",
            Column::FullName => "FirstNameLastName",
            Column::SubCategory => "subCategory",
            Column::Result => "result",
            Column::DateSold => "dateSold",
        }
    }

    pub fn sql_name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::JobTitle => "job_title",
            Column::EmailAddress => "email_address",
            Column::FullName => "full_name",
            Column::SubCategory => "sub_category",
            Column::Result => "result",
            Column::DateSold => "date_sold",
        }
    }

    pub fn value(self, record: &Record) -> &str {
        match self {
            Column::Id => &record.id,
            Column::JobTitle => &record.job_title,
            Column::EmailAddress => &record.email_address,
            Column::FullName => &record.full_name,
            Column::SubCategory => &record.sub_category,
            Column::Result => &record.result,
            Column::DateSold => &record.date_sold,
        }
    }
}

impl fmt::Display for Record {
    /// `<id> "<fullName>" <emailAddress> "<jobTitle>" <subCategory> <result> <dateSold>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {} {:?} {} {} {}",
            self.id,
            self.full_name,
            self.email_address,
            self.job_title,
            self.sub_category,
            self.result,
            self.date_sold,
        )
    }
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
    /// Leading records under the row cap (see [`crate::emit::row_cap`]).
    pub fn capped(&self, limit: i64) -> &[Record] {
        &self.records[..crate::emit::row_cap(self.records.len(), limit)]
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
