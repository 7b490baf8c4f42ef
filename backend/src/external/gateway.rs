//! AI Gateway Client
//!
//! Client for the OpenAI-compatible chat completions gateway that ranks crops.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::error::{AppError, AppResult};

/// One message in a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Anything that can turn a conversation into the assistant's reply text
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String>;
}

/// Request body sent to the gateway
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

// Only the fields we read from the completion envelope
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    // Some gateways send null content; an empty reply then takes the fallback path
    content: Option<String>,
}

/// Client for the AI gateway
#[derive(Clone)]
pub struct AiGatewayClient {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    http_client: Client,
}

impl AiGatewayClient {
    /// Create a new gateway client
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            http_client,
        })
    }

    /// Whether a credential is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletion for AiGatewayClient {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("AI gateway API key is not configured".to_string())
        })?;

        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("AI gateway error: {} {}", status.as_u16(), body);

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => AppError::QuotaExceeded,
                _ => AppError::Upstream {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse gateway response: {}", e)))?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::Internal("Gateway response contained no choices".to_string()))
    }
}
