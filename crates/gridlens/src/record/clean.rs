//! Uniform value cleaning across all record fields.

use indexmap::IndexMap;

use super::builder::Record;

/// A record whose values have all been rendered to trimmed strings.
pub type CleanedRecord = IndexMap<String, String>;

/// Render every value of a record to its trimmed string form.
///
/// Applied uniformly with no per-column type awareness: numeric-looking
/// values stay strings here, and numeric detection happens downstream.
/// Empty cells become `""`. Total and idempotent.
pub fn clean_record(record: &Record) -> CleanedRecord {
    record
        .iter()
        .map(|(key, value)| (key.clone(), value.to_clean_string()))
        .collect()
}

/// Clean every record, preserving record order.
pub fn clean_records(records: &[Record]) -> Vec<CleanedRecord> {
    records.iter().map(clean_record).collect()
}
