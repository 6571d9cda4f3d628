//! External AI collaborator integration.
//!
//! The pipeline hands composed prompts to a [`CompletionClient`] and parses
//! the free text that comes back. The integration is optional: the pipeline
//! works fully without a client configured.

mod client;
mod mock;
mod openai;
mod response;

pub use client::{AiConfig, CompletionClient};
pub use mock::MockClient;
pub use openai::OpenAiClient;
pub use response::{extract_insights, AiOutcome, Insights, TextOrList};
