//! Raw grid model: heterogeneous cells and the header/data split.

use serde::{Deserialize, Serialize};

use crate::error::{GridlensError, Result};

/// A single cell as produced by a spreadsheet decoder.
///
/// Cells are a tagged union rather than an untyped dynamic value so that
/// numeric detection and coercion stay explicit downstream. Serializes
/// untagged: numbers as numbers, text as strings, empty cells as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell (xlsx decoders produce these directly).
    Number(f64),
    /// A text cell, possibly with surrounding whitespace.
    Text(String),
    /// An empty or null cell.
    Empty,
}

impl CellValue {
    /// Render the cell to its trimmed string form.
    ///
    /// Empty cells become `""`. Numbers use Rust's minimal float display,
    /// so integral values render without a trailing fraction (`3`, not `3.0`),
    /// matching how spreadsheets display them.
    pub fn to_clean_string(&self) -> String {
        match self {
            CellValue::Number(n) => format!("{}", n),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Check whether the cell is empty or blank text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Empty => true,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// A raw 2-D grid of cell values. The first row is the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
}

impl RawGrid {
    /// Create a grid from decoded rows.
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Create a grid from string rows. All cells become text.
    pub fn from_strings<S: AsRef<str>>(rows: Vec<Vec<S>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|s| CellValue::Text(s.as_ref().to_string()))
                        .collect()
                })
                .collect(),
        }
    }

    /// Total number of rows, including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the header row (0 for an empty grid).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// All rows, including the header row.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Split the grid into `(headers, data_rows)`.
    ///
    /// Header cells are rendered to their trimmed string form. Fails with
    /// [`GridlensError::EmptyDataset`] if the grid has fewer than 2 rows or
    /// the header row has fewer than 2 columns: the pipeline needs at least
    /// one data row and an X and a Y field downstream.
    pub fn split(&self) -> Result<(Vec<String>, &[Vec<CellValue>])> {
        if self.rows.len() < 2 {
            return Err(GridlensError::EmptyDataset(format!(
                "need a header row and at least one data row, got {} row(s)",
                self.rows.len()
            )));
        }

        let headers: Vec<String> = self.rows[0].iter().map(CellValue::to_clean_string).collect();

        if headers.len() < 2 {
            return Err(GridlensError::EmptyDataset(format!(
                "header row has {} column(s), need at least 2",
                headers.len()
            )));
        }

        Ok((headers, &self.rows[1..]))
    }
}
