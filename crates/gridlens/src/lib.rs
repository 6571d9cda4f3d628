//! Gridlens: tabular ingestion and AI-assisted analysis for spreadsheet data.
//!
//! Gridlens turns an uploaded spreadsheet (xlsx/xls/csv) into a structured
//! analysis: schema-from-header records, per-column numeric statistics,
//! chart-ready series, and a natural-language prompt for an external
//! summarization service.
//!
//! # Pipeline
//!
//! raw grid → header/data split → arity-checked records → cleaned values →
//! {statistics, chart series, prompt} → assembled report.
//!
//! The pipeline is synchronous, stateless, and has no I/O of its own;
//! decoding files and calling the AI service are optional front/back doors.
//!
//! # Example
//!
//! ```
//! use gridlens::{Analyzer, RawGrid};
//!
//! let grid = RawGrid::from_strings(vec![
//!     vec!["Year", "Revenue"],
//!     vec!["2020", "100"],
//!     vec!["2021", "200"],
//! ]);
//!
//! let report = Analyzer::new().analyze_grid(&grid).unwrap();
//! assert_eq!(report.stats["Revenue"].mean, 150.0);
//! ```

pub mod ai;
pub mod chart;
pub mod error;
pub mod input;
pub mod prompt;
pub mod record;
pub mod stats;

mod analyzer;

pub use crate::analyzer::{AnalysisReport, Analyzer, AnalyzerConfig};
pub use ai::{AiConfig, AiOutcome, CompletionClient, Insights, MockClient, OpenAiClient};
pub use chart::{LabelValueSeries, Point, PointSeries};
pub use error::{GridlensError, Result};
pub use input::{CellValue, RawGrid, SourceMetadata};
pub use prompt::Domain;
pub use record::{CleanedRecord, Record};
pub use stats::ColumnStat;
