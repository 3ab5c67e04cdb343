use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::domain::{
    build_prompt, extract, AnalysisInput, AnalysisResult, ClassificationResult, DomainError,
    IntentResult, SentimentResult, SummaryResult,
};

/// Runs one analysis operation: builds the prompt, asks the chat client once,
/// and decodes the reply into the operation's result schema.
///
/// Chat client failures are returned unchanged. A reply that does not decode
/// yields [`DomainError::Extraction`]. Nothing is retried.
pub struct AnalyzeTextUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl AnalyzeTextUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute<R: AnalysisResult>(&self, input: &AnalysisInput) -> Result<R, DomainError> {
        let kind = R::KIND;
        info!("Running {} on {} chars of text", kind, input.char_count());

        let start_time = Instant::now();
        let prompt = build_prompt(kind, input.text());
        debug!("{} prompt: {}", kind, prompt);

        let reply = self.chat_client.complete(&prompt).await?;
        debug!("{} raw reply: {}", kind, reply);

        let result = extract::<R>(&reply).map_err(|e| {
            warn!("{} reply could not be decoded: {}", kind, e.reason());
            DomainError::from(e)
        })?;

        info!(
            "{} completed in {:.2}s",
            kind,
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }

    pub async fn classify(&self, input: &AnalysisInput) -> Result<ClassificationResult, DomainError> {
        self.execute(input).await
    }

    pub async fn analyze_sentiment(
        &self,
        input: &AnalysisInput,
    ) -> Result<SentimentResult, DomainError> {
        self.execute(input).await
    }

    pub async fn summarize(&self, input: &AnalysisInput) -> Result<SummaryResult, DomainError> {
        self.execute(input).await
    }

    pub async fn detect_intent(&self, input: &AnalysisInput) -> Result<IntentResult, DomainError> {
        self.execute(input).await
    }
}
