use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a prompt to a chat-completion model and receiving
/// its text reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Failures are reported as [`DomainError::Upstream`] and are passed
/// through to callers untouched.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a single user message and return the assistant's reply.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    /// Model identifier, for logging and health reporting.
    fn model(&self) -> &str;
}
