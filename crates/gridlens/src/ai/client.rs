//! Completion client trait and configuration.

use crate::error::Result;

/// Configuration for completion clients.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Model to use.
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
            temperature: 0.3,
        }
    }
}

/// Trait for external completion services.
///
/// Implementations must be thread-safe (Send + Sync) so one client can be
/// shared across concurrent analysis requests. The call is a network
/// operation from the pipeline's point of view: implementations own their
/// timeout policy, and callers own retries.
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the raw completion text.
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this client.
    fn config(&self) -> &AiConfig;

    /// Get the name of this client (for logging/debugging).
    fn name(&self) -> &str;
}
