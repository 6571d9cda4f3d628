//! Row-to-record conversion and value cleaning.

mod builder;
mod clean;

pub use builder::{build_records, Record};
pub use clean::{clean_record, clean_records, CleanedRecord};
