use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::ProviderConfig;
use crate::errors::ProviderError;
use crate::providers::{CompletionRequest, CompletionResponse, Provider};

/// OpenAI-compatible chat completions client
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL, e.g. `https://api.openai.com/v1`
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature,
            max_tokens,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }
}

impl ChatResponse {
    /// Text of the first choice, trimmed
    pub fn text(&self) -> Option<String> {
        self.choices
            .first()
            .map(|c| c.message.content.trim().to_string())
    }
}

impl OpenAI {
    /// Create a new client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_timeout(api_key, endpoint, model, Duration::from_secs(60))
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: 0.2,
            max_tokens: 4000,
        }
    }

    /// Build a client from configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        let mut client = Self::with_timeout(
            config.resolved_api_key(),
            config.endpoint.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        );
        client.temperature = config.temperature;
        client.max_tokens = config.max_tokens;
        client
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }

    /// Send a raw chat request
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "No API key configured (set provider.api_key or OPENAI_API_KEY)".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProviderError::AuthenticationError(error_text)
                }
                _ => ProviderError::ApiError {
                    status_code: status.as_u16(),
                    message: error_text,
                },
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Provider for OpenAI {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let chat = ChatRequest::new(&self.model, self.temperature, self.max_tokens)
            .add_message("system", request.system_prompt)
            .add_message("user", request.user_prompt);

        let response = self.chat(&chat).await?;
        let text = response
            .text()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::ParseError("Response contained no text".to_string()))?;

        Ok(CompletionResponse {
            text,
            prompt_tokens: response.usage.as_ref().map(|u| u.prompt_tokens),
            completion_tokens: response.usage.as_ref().map(|u| u.completion_tokens),
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = ChatRequest::new(&self.model, 0.0, 5).add_message("user", "Hello");
        self.chat(&request).await?;
        Ok(())
    }
}
