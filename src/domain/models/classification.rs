use serde::{Deserialize, Serialize};

use super::{AnalysisResult, OperationKind};

/// Labels and primary category assigned to a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassificationResult {
    labels: Vec<String>,
    primary_category: String,
    confidence: f64,
}

impl ClassificationResult {
    pub fn new(labels: Vec<String>, primary_category: impl Into<String>, confidence: f64) -> Self {
        Self {
            labels,
            primary_category: primary_category.into(),
            confidence,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn primary_category(&self) -> &str {
        &self.primary_category
    }

    /// Expected in `[0, 1]`, not enforced.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl AnalysisResult for ClassificationResult {
    const KIND: OperationKind = OperationKind::Classify;
}
