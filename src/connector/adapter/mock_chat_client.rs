use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, SAMPLE_HEADER};

const MOCK_MODEL: &str = "mock-chat";

enum MockBehavior {
    /// Answer with the sample JSON object the prompt asks for.
    Echo,
    Reply(String),
    Fail(String),
}

/// Offline [`ChatClient`] for tests and `--mock` runs.
///
/// Prompts are only kept when built with [`Self::recording`]; they can then be
/// inspected with [`Self::prompts`].
pub struct MockChatClient {
    behavior: MockBehavior,
    prompts: Option<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(message.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: None,
        }
    }

    /// Keep every prompt received. Meant for tests; the list is never drained.
    pub fn recording(mut self) -> Self {
        self.prompts = Some(Mutex::new(Vec::new()));
        self
    }

    /// Prompts received so far, empty unless recording.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .as_ref()
            .map(|prompts| prompts.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }

    fn sample_from_prompt(prompt: &str) -> String {
        prompt
            .rsplit_once(SAMPLE_HEADER)
            .map(|(_, sample)| sample.to_string())
            .unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if let Some(prompts) = &self.prompts {
            prompts
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(prompt.to_string());
        }

        let reply = match &self.behavior {
            MockBehavior::Echo => Self::sample_from_prompt(prompt),
            MockBehavior::Reply(reply) => reply.clone(),
            MockBehavior::Fail(message) => return Err(DomainError::upstream(message.clone())),
        };

        debug!("MockChatClient reply: {}", reply);
        Ok(reply)
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_prompt, sample_json, OperationKind};

    #[tokio::test]
    async fn echo_mode_answers_with_prompt_sample() {
        let client = MockChatClient::new().recording();
        for kind in OperationKind::ALL {
            let reply = client.complete(&build_prompt(kind, "anything")).await.unwrap();
            assert_eq!(reply, sample_json(kind));
        }
        assert_eq!(client.prompts().len(), 4);
    }

    #[tokio::test]
    async fn fixed_reply_is_returned_verbatim() {
        let client = MockChatClient::with_reply("  ```json\n{}\n```  ");
        assert_eq!(client.complete("p").await.unwrap(), "  ```json\n{}\n```  ");
    }

    #[tokio::test]
    async fn failing_mode_returns_upstream_error() {
        let client = MockChatClient::failing("quota exceeded").recording();
        let err = client.complete("p").await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(client.prompts(), vec!["p".to_string()]);
    }

    #[tokio::test]
    async fn default_client_records_nothing() {
        let client = MockChatClient::new();
        for i in 0..1_000 {
            client.complete(&format!("prompt {i}")).await.unwrap();
        }
        assert!(client.prompts().is_empty());
    }
}
