pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AnalyzeTextUseCase, ChatClient};

pub use cli::Commands;

pub use connector::{MockChatClient, OllamaChatClient, OllamaConfig};

pub use domain::{
    build_prompt, extract, sample_json, strip_code_fences, AnalysisInput, AnalysisResult,
    ClassificationResult, DomainError, ExtractionError, IntentResult, OperationKind,
    SentimentResult, SummaryResult,
};
