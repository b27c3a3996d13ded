//! External chat-completion provider.
//!
//! `OpenAiProvider` speaks the OpenAI-compatible `/chat/completions` format,
//! so any API exposing that endpoint can sit behind `OPENAI_BASE_URL`.

use async_trait::async_trait;
use fretline_core::{Error, ProviderSettings, Result};
use reqwest::Client;
use tracing::{debug, error};

use crate::types::{ChatMessage, CompletionRequest, CompletionResponse};

/// A source of chat completions.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the conversation and return the first choice's raw content.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Provider backed by an OpenAI-compatible HTTP API.
pub struct OpenAiProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Build the provider and its HTTP client. Called once at startup.
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", settings.base_url),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
        };

        debug!("Requesting completion from {} with model {}", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Completion API returned {}", status);
            return Err(Error::Provider(format!("API error {}: {}", status, body)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;
        let parsed: CompletionResponse =
            serde_json::from_str(&text).map_err(|e| Error::Provider(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("completion response contained no choices".into()))?;

        choice
            .message
            .content
            .ok_or_else(|| Error::Provider("completion choice had no message content".into()))
    }
}
