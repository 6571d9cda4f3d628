//! Main Analyzer struct and public API.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ai::{AiOutcome, CompletionClient};
use crate::chart::{label_value_series, point_series, LabelValueSeries, PointSeries};
use crate::error::Result;
use crate::input::{decode_file, RawGrid, SourceMetadata};
use crate::prompt::{self, Domain};
use crate::record::{build_records, clean_records, CleanedRecord};
use crate::stats::{column_statistics, ColumnStat};

/// Number of cleaned records included in the report preview.
const PREVIEW_ROWS: usize = 5;

/// Configuration for an analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Domain variant for prompt composition.
    pub domain: Domain,
}

/// The assembled result of one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Header names, in column order.
    pub columns: Vec<String>,
    /// First few cleaned records.
    pub preview: Vec<CleanedRecord>,
    /// Statistics per numeric-looking column; non-numeric columns absent.
    pub stats: IndexMap<String, ColumnStat>,
    /// Label/value view over the first two columns (zero-fill policy).
    pub chart_data: LabelValueSeries,
    /// Point view per Y column (drop-on-missing policy).
    pub charts: Vec<PointSeries>,
    /// Outcome of the external summarization call, when a client is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiOutcome>,
}

/// The tabular ingestion-and-analysis pipeline.
///
/// Stateless across invocations: each call derives everything from its
/// input grid, so one Analyzer can serve concurrent requests.
pub struct Analyzer {
    config: AnalyzerConfig,
    client: Option<Arc<dyn CompletionClient>>,
}

impl Analyzer {
    /// Create a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Select the domain variant used for prompt composition.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.config.domain = domain;
        self
    }

    /// Attach an external completion client.
    ///
    /// When a client is configured, the report carries the parsed (or raw)
    /// summarizer output in `ai_analysis`.
    pub fn with_ai(mut self, client: impl CompletionClient + 'static) -> Self {
        self.client = Some(Arc::new(client));
        self
    }

    /// Run the full pipeline over a raw grid.
    pub fn analyze_grid(&self, grid: &RawGrid) -> Result<AnalysisReport> {
        let (headers, rows) = grid.split()?;

        let records = build_records(&headers, rows);
        let cleaned = clean_records(&records);

        let stats = column_statistics(&headers, &cleaned);
        let chart_data = label_value_series(&headers[0], &headers[1], &cleaned);
        let charts = point_series(&headers, &cleaned);

        let ai_analysis = match &self.client {
            Some(client) => {
                let prompt_text = prompt::compose(self.config.domain, &cleaned)?;
                let completion = client.complete(&prompt_text)?;
                Some(AiOutcome::from_completion(&completion))
            }
            None => None,
        };

        let preview = cleaned.iter().take(PREVIEW_ROWS).cloned().collect();

        Ok(AnalysisReport {
            columns: headers,
            preview,
            stats,
            chart_data,
            charts,
            ai_analysis,
        })
    }

    /// Decode a file and run the pipeline over it.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<(AnalysisReport, SourceMetadata)> {
        let (grid, source) = decode_file(path)?;
        let report = self.analyze_grid(&grid)?;
        Ok((report, source))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
