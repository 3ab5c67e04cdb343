use serde::{Deserialize, Serialize};

use super::{AnalysisResult, OperationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SummaryResult {
    summary: String,
    key_points: Vec<String>,
    word_count: i64,
}

impl SummaryResult {
    pub fn new(summary: impl Into<String>, key_points: Vec<String>, word_count: i64) -> Self {
        Self {
            summary: summary.into(),
            key_points,
            word_count,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn key_points(&self) -> &[String] {
        &self.key_points
    }

    /// Word count of the summary as reported by the model.
    pub fn word_count(&self) -> i64 {
        self.word_count
    }
}

impl AnalysisResult for SummaryResult {
    const KIND: OperationKind = OperationKind::Summarize;
}
