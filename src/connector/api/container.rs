use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AnalyzeTextUseCase, ChatClient};
use crate::connector::{MockChatClient, OllamaChatClient, OllamaConfig};

/// Echo client used for `--mock` runs. It keeps no per-request state.
fn offline_chat_client() -> MockChatClient {
    MockChatClient::new()
}

pub struct ContainerConfig {
    pub ollama: OllamaConfig,
    /// Answer every prompt offline with its own sample reply instead of calling a model.
    pub mock_chat: bool,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock_chat {
            debug!("Using mock chat client");
            Arc::new(offline_chat_client())
        } else {
            debug!(
                "Using Ollama chat client at {} model {}",
                config.ollama.base_url, config.ollama.model
            );
            Arc::new(OllamaChatClient::new(config.ollama)?)
        };

        Ok(Self { chat_client })
    }

    /// Wire the container around an already constructed chat client.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub fn analyze_use_case(&self) -> AnalyzeTextUseCase {
        AnalyzeTextUseCase::new(self.chat_client.clone())
    }

    pub fn model(&self) -> &str {
        self.chat_client.model()
    }
}
