//! Mock completion client for testing.

use crate::error::Result;

use super::client::{AiConfig, CompletionClient};

/// Mock client that returns a fixed completion for any prompt.
pub struct MockClient {
    response: String,
    config: AiConfig,
}

impl MockClient {
    /// Create a mock that returns a well-formed contract, prefixed with
    /// prose so tests exercise the first-brace extraction path.
    pub fn new() -> Self {
        Self::with_response(
            r#"Here is your analysis:
{
  "summary": "Mock dataset summary.",
  "issues": "No issues detected.",
  "trends": "No trends detected.",
  "insights": ["mock insight"],
  "recommendations": ["mock recommendation"],
  "additional_data_needed": "None."
}"#,
        )
    }

    /// Create a mock that returns the given text verbatim.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            config: AiConfig::default(),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionClient for MockClient {
    fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }

    fn config(&self) -> &AiConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
