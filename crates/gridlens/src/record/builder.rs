//! Combines headers with data rows into keyed records.

use indexmap::IndexMap;

use crate::input::CellValue;

/// One data row reassociated with header names as keys, in header order.
pub type Record = IndexMap<String, CellValue>;

/// Zip each data row with the headers into a record.
///
/// Rows whose length differs from the header length are dropped silently:
/// ragged input is tolerated, not rejected, so the output length may be
/// less than the row count. Row order is preserved.
///
/// Duplicate header names follow map insert semantics: the later column's
/// value wins. This mirrors the associative-array behavior of the upload
/// pipelines this crate feeds; stricter validation is a possible future
/// policy, not the current one.
pub fn build_records(headers: &[String], rows: &[Vec<CellValue>]) -> Vec<Record> {
    rows.iter()
        .filter(|row| row.len() == headers.len())
        .map(|row| {
            headers
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect::<Record>()
        })
        .collect()
}
