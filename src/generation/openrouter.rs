//! OpenRouter chat-completion client
//!
//! One synchronous request per invocation, no retries. The request timeout
//! is explicit and a timeout surfaces as its own error, distinct from a
//! non-success status.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};

/// A single completion request, opaque beyond these fields
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction framing the assistant
    pub system: String,
    /// User content (prompt plus any inlined document text)
    pub user: String,
    /// Output token budget
    pub max_tokens: u32,
    /// Sampling temperature; `None` relies on the remote default
    pub temperature: Option<f32>,
}

/// Trait for the remote completion capability
///
/// The production implementation is [`OpenRouterClient`]; tests substitute
/// a scripted mock.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue one completion request, returning the first choice's trimmed content
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier in use
    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// OpenRouter API client
pub struct OpenRouterClient {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

impl OpenRouterClient {
    /// Create a new client, resolving the API key from the environment
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self::with_api_key(config, api_key))
    }

    /// Create a new client with an explicit API key
    pub fn with_api_key(config: &LlmConfig, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: request.system },
                ChatMessage { role: "user", content: request.user },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!("Sending completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::LlmTimeout(self.config.timeout_secs)
                } else {
                    Error::llm(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LlmStatus {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::LlmResponse(format!("failed to decode response: {}", e)))?;

        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::LlmResponse("no choices in response".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
