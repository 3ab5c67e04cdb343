use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://ollama.com";
pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
const CHAT_PATH: &str = "/api/chat";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    stream: bool,
    options: ApiOptions,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ApiOptions {
    temperature: f32,
}

/// Minimal subset of the Ollama chat response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Settings for [`OllamaChatClient`].
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Sent as a bearer token when non-empty. Not needed for a local server.
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the Ollama chat API (hosted `ollama.com` or a local server).
///
/// Each call is a single non-streaming request. The timeout applies to the
/// whole request; there is no retry.
pub struct OllamaChatClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + CHAT_PATH).
    url: String,
    model: String,
    temperature: f32,
    api_key: String,
}

impl OllamaChatClient {
    pub fn new(config: OllamaConfig) -> Result<Self, DomainError> {
        let url = format!("{}{CHAT_PATH}", config.base_url.trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("OllamaChatClient: failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url,
            model: config.model,
            temperature: config.temperature,
            api_key: config.api_key,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for OllamaChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            options: ApiOptions {
                temperature: self.temperature,
            },
        };

        debug!("OllamaChatClient: POST {} (model={})", self.url, self.model);

        let mut builder = self.client.post(&self.url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OllamaChatClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaChatClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OllamaChatClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("OllamaChatClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.message.content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
