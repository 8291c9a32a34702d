/*!
 * Mock provider implementations for testing.
 *
 * - `MockProvider::working()` - echoes the text back with every templating tag intact
 * - `MockProvider::dropping_tags()` - succeeds but loses templating tags
 * - `MockProvider::failing()` - always fails with an error
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{CompletionRequest, CompletionResponse, Provider};
use crate::translation::protect;

/// Prefix added to every "translated" text
pub const MOCK_PREFIX: &str = "مترجم: ";

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Always succeeds, keeping templating tags
    Working,
    /// Succeeds but strips templating tags from the output
    DroppingTags,
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    /// Number of `complete` calls, shared between clones
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn dropping_tags() -> Self {
        Self::new(MockBehavior::DroppingTags)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Get the number of requests made
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The text part of a user prompt built by `prompt::user_prompt`
    fn extract_text(user_prompt: &str) -> &str {
        user_prompt
            .split_once("Text to translate:\n")
            .map(|(_, text)| text)
            .unwrap_or(user_prompt)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        let text = Self::extract_text(&request.user_prompt);

        let output = match self.behavior {
            MockBehavior::Working => format!("{}{}", MOCK_PREFIX, text),
            MockBehavior::DroppingTags => {
                let mut stripped = text.to_string();
                for tag in protect::templating_tags(text) {
                    stripped = stripped.replace(tag, "");
                }
                format!("{}{}", MOCK_PREFIX, stripped)
            }
            MockBehavior::Failing => {
                return Err(ProviderError::ConnectionError(
                    "Mock provider configured to fail".to_string(),
                ));
            }
        };

        Ok(CompletionResponse {
            prompt_tokens: Some(request.user_prompt.len() as u64 / 4),
            completion_tokens: Some(output.len() as u64 / 4),
            text: output,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Mock provider configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
