//! Error types for the Gridlens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Gridlens operations.
#[derive(Debug, Error)]
pub enum GridlensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error decoding a spreadsheet workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Grid missing, too few rows, or header row too short.
    #[error("Empty or malformed dataset: {0}")]
    EmptyDataset(String),

    /// Configuration error (missing API key, bad client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The AI service returned text with no valid JSON after the first '{'.
    /// Carries the raw response so callers can surface it for diagnostics.
    #[error("AI response is not valid JSON: {message}")]
    AiResponseParse { message: String, raw: String },
}

/// Result type alias for Gridlens operations.
pub type Result<T> = std::result::Result<T, GridlensError>;
