//! Parsing of the structured response contract from free completion text.

use serde::{Deserialize, Serialize};

use crate::error::{GridlensError, Result};

/// A contract field the service may fill as prose or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::Text(String::new())
    }
}

/// The structured response contract the summarizer is instructed to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Brief summary of the dataset.
    pub summary: String,
    /// Missing, inconsistent, or outlier data patterns.
    #[serde(default)]
    pub issues: TextOrList,
    /// Notable trends or correlations.
    #[serde(default)]
    pub trends: TextOrList,
    /// Named insights.
    #[serde(default)]
    pub insights: TextOrList,
    /// Actionable recommendations.
    #[serde(default)]
    pub recommendations: TextOrList,
    /// What data would improve future analysis.
    #[serde(default)]
    pub additional_data_needed: TextOrList,
}

/// Outcome of parsing a completion: either the structured contract, or the
/// raw text kept alongside the parse failure for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AiOutcome {
    Parsed { insights: Insights },
    Unparsed { raw: String, error: String },
}

impl AiOutcome {
    /// Parse completion text, never discarding it on failure.
    pub fn from_completion(text: &str) -> Self {
        match extract_insights(text) {
            Ok(insights) => AiOutcome::Parsed { insights },
            Err(GridlensError::AiResponseParse { message, raw }) => AiOutcome::Unparsed {
                raw,
                error: message,
            },
            // extract_insights only produces AiResponseParse, but keep the
            // fallback total rather than panicking.
            Err(e) => AiOutcome::Unparsed {
                raw: text.to_string(),
                error: e.to_string(),
            },
        }
    }
}

/// Locate the first `{` in the completion text and parse the structured
/// contract from there. Models often prefix prose or markdown fences;
/// everything before the first brace is ignored.
pub fn extract_insights(text: &str) -> Result<Insights> {
    let start = text.find('{').ok_or_else(|| GridlensError::AiResponseParse {
        message: "no '{' found in response".to_string(),
        raw: text.to_string(),
    })?;

    serde_json::from_str(&text[start..]).map_err(|e| GridlensError::AiResponseParse {
        message: e.to_string(),
        raw: text.to_string(),
    })
}
