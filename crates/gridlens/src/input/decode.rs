//! File decoders that turn uploaded spreadsheets into a [`RawGrid`].
//!
//! CSV/TSV files go through the `csv` crate with delimiter auto-detection;
//! xlsx/xls workbooks go through `calamine` (first worksheet only).

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::grid::{CellValue, RawGrid};
use crate::error::{GridlensError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Metadata about the decoded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, xlsx, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns in the header row.
    pub column_count: usize,
    /// When the file was decoded.
    pub decoded_at: DateTime<Utc>,
}

impl SourceMetadata {
    fn new(path: &Path, hash: String, size_bytes: u64, format: String, grid: &RawGrid) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path: path.to_path_buf(),
            hash,
            size_bytes,
            format,
            row_count: grid.row_count().saturating_sub(1),
            column_count: grid.column_count(),
            decoded_at: Utc::now(),
        }
    }
}

/// Decode a file into a raw grid, dispatching on the file extension.
///
/// `csv`, `tsv`, and `txt` are read as delimited text with delimiter
/// detection; `xlsx`, `xlsm`, `xlsb`, and `xls` are read as workbooks.
/// Anything else is rejected before reaching the pipeline.
pub fn decode_file(path: impl AsRef<Path>) -> Result<(RawGrid, SourceMetadata)> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !matches!(
        extension.as_str(),
        "csv" | "tsv" | "txt" | "xlsx" | "xlsm" | "xlsb" | "xls"
    ) {
        return Err(GridlensError::UnsupportedFormat(format!(
            "extension '{}' is not a csv/tsv/xlsx/xls file",
            extension
        )));
    }

    let mut file = File::open(path).map_err(|e| GridlensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(|e| GridlensError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());
    let size_bytes = contents.len() as u64;

    let (grid, format) = match extension.as_str() {
        "csv" | "tsv" | "txt" => {
            let delimiter = detect_delimiter(&contents)?;
            let grid = decode_csv_bytes(&contents, delimiter)?;
            (grid, format_name(delimiter).to_string())
        }
        _ => {
            let grid = decode_workbook(path)?;
            (grid, extension.clone())
        }
    };

    let metadata = SourceMetadata::new(path, hash, size_bytes, format, &grid);
    Ok((grid, metadata))
}

/// Decode delimited text bytes into a raw grid. All cells become text;
/// numeric detection happens downstream, not here.
pub fn decode_csv_bytes(bytes: &[u8], delimiter: u8) -> Result<RawGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<CellValue> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(RawGrid::new(rows))
}

/// Decode the first worksheet of an Excel workbook.
fn decode_workbook(path: &Path) -> Result<RawGrid> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| GridlensError::Spreadsheet(format!("failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GridlensError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| GridlensError::Spreadsheet(format!("failed to read worksheet: {}", e)))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    Ok(RawGrid::new(rows))
}

/// Map a calamine cell to the grid's tagged cell union.
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Human-readable format name for a delimiter.
fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(GridlensError::EmptyDataset(
            "no lines to analyze".to_string(),
        ));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent count per line wins; tabs get a small bonus since
        // they rarely appear inside actual data.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_decode_csv_bytes() {
        let data = b"Year,Revenue\n2020,100\n2021,200";
        let grid = decode_csv_bytes(data, b',').unwrap();

        assert_eq!(grid.row_count(), 3);
        let (headers, rows) = grid.split().unwrap();
        assert_eq!(headers, vec!["Year", "Revenue"]);
        assert_eq!(rows[0][1], CellValue::Text("100".to_string()));
    }

    #[test]
    fn test_decode_empty_fields_become_empty_cells() {
        let data = b"a,b\n1,\n,2";
        let grid = decode_csv_bytes(data, b',').unwrap();
        let (_, rows) = grid.split().unwrap();

        assert_eq!(rows[0][1], CellValue::Empty);
        assert_eq!(rows[1][0], CellValue::Empty);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = decode_file("data.pdf").unwrap_err();
        assert!(matches!(err, GridlensError::UnsupportedFormat(_)));
    }
}
