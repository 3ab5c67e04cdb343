use serde::{Deserialize, Serialize};

use super::{AnalysisResult, OperationKind};

/// Overall sentiment, its score and the emotions detected in a text.
///
/// `overall_sentiment` is conventionally `positive`, `negative` or `neutral`
/// and `sentiment_score` lies in `[-1, 1]`; neither is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SentimentResult {
    overall_sentiment: String,
    sentiment_score: f64,
    emotions: Vec<String>,
    confidence: f64,
}

impl SentimentResult {
    pub fn new(
        overall_sentiment: impl Into<String>,
        sentiment_score: f64,
        emotions: Vec<String>,
        confidence: f64,
    ) -> Self {
        Self {
            overall_sentiment: overall_sentiment.into(),
            sentiment_score,
            emotions,
            confidence,
        }
    }

    pub fn overall_sentiment(&self) -> &str {
        &self.overall_sentiment
    }

    pub fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }

    pub fn emotions(&self) -> &[String] {
        &self.emotions
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl AnalysisResult for SentimentResult {
    const KIND: OperationKind = OperationKind::Sentiment;
}
