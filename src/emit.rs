//! SQL statement emission and the human-readable listing.
use std::io::Write;

use crate::error::Result;
use crate::format;
use crate::record::{Column, RecordCollection};

pub const DEFAULT_TABLE: &str = "sales";

/// Number of records to process: `limit > 0` caps, anything else means all.
pub fn row_cap(len: usize, limit: i64) -> usize {
    match usize::try_from(limit) {
        Ok(limit) if limit > 0 => len.min(limit),
        _ => len,
    }
}

/// `id, job_title, email_address, full_name, sub_category, result, date_sold`
pub fn column_list() -> String {
    Column::ALL.map(Column::sql_name).join(", ")
}

/// Write one `insert` per record (up to the row cap), in order.
///
/// Stops at the first write failure; lines already written stay written.
/// Returns the number of statements written.
pub fn emit<W: Write>(records: &RecordCollection, limit: i64, table: &str, out: &mut W) -> Result<usize> {
    let rows = records.capped(limit);
    let n_rows = rows.len();
    let prefix = format!("insert into {table}");
    let columns = column_list();
    for record in rows {
        writeln!(out, "{prefix} ({columns}) values({});", format::values(record))?;
    }
    log::info!("wrote {n_rows} insert statements into `{table}`");
    Ok(n_rows)
}

/// Write the display line for each record (up to the row cap).
pub fn show<W: Write>(records: &RecordCollection, limit: i64, out: &mut W) -> Result<()> {
    for record in records.capped(limit) {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn numbered(n: usize) -> RecordCollection {
        let records = (1..=n)
            .map(|i| Record {
                id: i.to_string(),
                job_title: format!("Job {i}"),
                date_sold: if i % 2 == 0 { String::new() } else { format!("{i}/1/2020") },
                ..Record::default()
            })
            .collect();
        RecordCollection::new(records)
    }

    fn emitted(records: &RecordCollection, limit: i64) -> Vec<String> {
        let mut out = Vec::new();
        let n = emit(records, limit, DEFAULT_TABLE, &mut out).unwrap();
        let lines: Vec<String> = String::from_utf8(out).unwrap().lines().map(str::to_string).collect();
        assert_eq!(n, lines.len());
        lines
    }

    #[test]
    fn row_cap_rules() {
        assert_eq!(row_cap(5, 2), 2);
        assert_eq!(row_cap(5, 5), 5);
        assert_eq!(row_cap(5, 9), 5);
        assert_eq!(row_cap(5, 0), 5);
        assert_eq!(row_cap(5, -1), 5);
        assert_eq!(row_cap(5, i64::MIN), 5);
        assert_eq!(row_cap(0, 3), 0);
    }

    #[test]
    fn single_record_statement() {
        let record = Record {
            id: "1".into(),
            job_title: "Clerk".into(),
            email_address: "a@b.com".into(),
            full_name: "A B".into(),
            sub_category: "Retail".into(),
            result: "Sold".into(),
            date_sold: "".into(),
        };
        assert_eq!(
            emitted(&RecordCollection::new(vec![record]), -1),
            ["insert into sales (id, job_title, email_address, full_name, sub_category, result, date_sold) values(1, 'Clerk', 'a@b.com', 'A B', 'Retail', 'Sold', null);"]
        );
    }

    #[test]
    fn limit_takes_leading_records_in_order() {
        let lines = emitted(&numbered(5), 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("values(1, 'Job 1'"));
        assert!(lines[1].contains("values(2, 'Job 2'"));
    }

    #[test]
    fn zero_or_negative_limit_emits_everything() {
        assert_eq!(emitted(&numbered(5), 0).len(), 5);
        assert_eq!(emitted(&numbered(5), -3).len(), 5);
    }

    #[test]
    fn every_statement_uses_the_fixed_column_list() {
        let expected = format!("insert into sales ({}) values(", column_list());
        for line in emitted(&numbered(4), -1) {
            assert!(line.starts_with(&expected), "{line}");
            assert!(line.ends_with(");"), "{line}");
        }
    }

    #[test]
    fn each_statement_ends_with_newline() {
        let mut out = Vec::new();
        emit(&numbered(3), -1, "t", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.ends_with(";\n"));
    }

    #[test]
    fn show_lists_capped_records() {
        let mut out = Vec::new();
        show(&numbered(3), 2, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 \"\"  \"Job 1\"   1/1/2020\n2 \"\"  \"Job 2\"   \n"
        );
    }

    struct FailAfter {
        lines_left: usize,
        written: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.lines_left == 0 {
                return Err(std::io::Error::other("disk full"));
            }
            self.written.extend_from_slice(buf);
            if buf.contains(&b'\n') {
                self.lines_left -= 1;
            }
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_stops_and_keeps_earlier_lines() {
        let mut out = FailAfter { lines_left: 2, written: Vec::new() };
        let err = emit(&numbered(5), -1, DEFAULT_TABLE, &mut out).unwrap_err();
        assert!(matches!(err, crate::Error::Write(_)), "{err:?}");
        let text = String::from_utf8(out.written).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
