//! Input decoding and the raw grid model.

mod decode;
mod grid;

pub use decode::{decode_csv_bytes, decode_file, SourceMetadata};
pub use grid::{CellValue, RawGrid};
