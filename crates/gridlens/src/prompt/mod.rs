//! Prompt composition for the external summarization service.
//!
//! A capped sample of cleaned records is serialized to compact JSON and
//! embedded in a fixed natural-language template. Domain variants differ
//! only in their framing sentence and field vocabulary, never in the
//! structure of the response contract the service is asked to return.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::CleanedRecord;

/// Maximum number of records serialized into a prompt.
pub const SAMPLE_CAP: usize = 50;

/// Domain variant selecting the prompt's framing and vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    General,
    Health,
    Fitness,
    Sports,
    Business,
}

impl Domain {
    /// The analyst persona named in the framing sentence.
    fn analyst(&self) -> &'static str {
        match self {
            Domain::General => "professional data analyst",
            Domain::Health => "professional health data analyst",
            Domain::Fitness => "professional fitness data analyst",
            Domain::Sports => "professional sports data analyst",
            Domain::Business => "professional business data analyst",
        }
    }

    /// How the embedded dataset is introduced.
    fn dataset_label(&self) -> &'static str {
        match self {
            Domain::General => "the following dataset",
            Domain::Health => "this health dataset",
            Domain::Fitness => "this fitness dataset",
            Domain::Sports => "this sports performance dataset",
            Domain::Business => "this business dataset",
        }
    }

    /// The tagged-field response contract, with domain vocabulary.
    fn contract(&self) -> &'static str {
        match self {
            Domain::General => {
                r#"{
  "summary": "Brief summary of the dataset",
  "issues": "Any missing, inconsistent, or outlier data patterns",
  "trends": "Notable trends or correlations you observe",
  "insights": ["...", "...", "..."],
  "recommendations": ["...", "..."],
  "additional_data_needed": "What data would improve future analysis"
}"#
            }
            Domain::Health => {
                r#"{
  "summary": "Brief summary of the dataset",
  "issues": "Any missing or inconsistent data patterns",
  "trends": "Trends or correlations you observe",
  "insights": "3 key health-related insights",
  "recommendations": "Actionable health suggestions",
  "additional_data_needed": "Data that would improve future analysis"
}"#
            }
            Domain::Fitness => {
                r#"{
  "summary": "Brief summary of the dataset",
  "issues": "Any missing or inconsistent data patterns",
  "trends": "Trends or correlations you observe related to fitness levels or progress",
  "insights": "3 key fitness-related insights from the data",
  "recommendations": "Actionable fitness suggestions to improve performance or health",
  "additional_data_needed": "Data that would improve future analysis"
}"#
            }
            Domain::Sports => {
                r#"{
  "summary": "Brief summary of the dataset",
  "issues": "Any missing, inconsistent, or unusual data patterns",
  "trends": "Performance trends, patterns, or correlations between key metrics",
  "insights": "3 key insights about player/team performance",
  "recommendations": "Actionable suggestions to improve sports performance or strategy",
  "additional_data_needed": "Any data that would enhance future sports analysis"
}"#
            }
            Domain::Business => {
                r#"{
  "summary": "Brief summary of the dataset",
  "issues": "Any missing, inconsistent, or outlier data patterns",
  "trends": "Notable business trends, correlations, or performance patterns",
  "insights": "3 actionable business insights (e.g., about customers, sales, conversion)",
  "recommendations": "Business suggestions to improve growth, reduce churn, or optimize performance",
  "additional_data_needed": "What data would improve future business decisions"
}"#
            }
        }
    }
}

/// Compose the analysis request for an external summarizer.
///
/// Serializes at most [`SAMPLE_CAP`] records and embeds them in the
/// domain's template. Pure formatting; performs no network I/O.
pub fn compose(domain: Domain, records: &[CleanedRecord]) -> Result<String> {
    let sample = &records[..records.len().min(SAMPLE_CAP)];
    let dataset_json = serde_json::to_string(sample)?;

    Ok(format!(
        "You are a {analyst}.\n\n\
         Given {label}:\n\n\
         {dataset}\n\n\
         Respond ONLY in JSON format, without any markdown or explanation. Structure:\n\
         {contract}",
        analyst = domain.analyst(),
        label = domain.dataset_label(),
        dataset = dataset_json,
        contract = domain.contract(),
    ))
}

/// System prompt for all summarization requests.
pub fn system_prompt() -> &'static str {
    "You are a professional data analyst. Return valid JSON only."
}
