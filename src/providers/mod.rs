/*!
 * Optional high-quality translation providers.
 *
 * - `openai`: OpenAI-compatible chat completions client
 * - `mock`: scripted provider for tests
 * - `prompt`: system and user prompt construction
 *
 * Providers are never required: any error they return sends the document
 * back to the rule-based pipeline.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Instructions describing the preservation rules and glossary
    pub system_prompt: String,
    /// The text to translate, with context
    pub user_prompt: String,
}

/// Provider output
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    pub text: String,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
}

/// Common trait for all translation providers
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Complete a request using this provider
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod openai;
pub mod prompt;

pub use mock::MockProvider;
pub use openai::OpenAI;
