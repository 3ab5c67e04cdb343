use serde::{Deserialize, Serialize};

use super::{AnalysisResult, OperationKind};

/// Primary and secondary intents behind a text.
///
/// `intent_category` is conventionally one of `question`, `request`,
/// `statement` or `command`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IntentResult {
    primary_intent: String,
    secondary_intents: Vec<String>,
    intent_category: String,
    confidence: f64,
}

impl IntentResult {
    pub fn new(
        primary_intent: impl Into<String>,
        secondary_intents: Vec<String>,
        intent_category: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            primary_intent: primary_intent.into(),
            secondary_intents,
            intent_category: intent_category.into(),
            confidence,
        }
    }

    pub fn primary_intent(&self) -> &str {
        &self.primary_intent
    }

    pub fn secondary_intents(&self) -> &[String] {
        &self.secondary_intents
    }

    pub fn intent_category(&self) -> &str {
        &self.intent_category
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl AnalysisResult for IntentResult {
    const KIND: OperationKind = OperationKind::DetectIntent;
}
