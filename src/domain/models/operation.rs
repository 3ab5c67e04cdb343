use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The analysis task to run. Selects both the prompt template and the
/// result schema the reply is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Classify,
    Sentiment,
    Summarize,
    #[serde(rename = "intent")]
    DetectIntent,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Classify,
        OperationKind::Sentiment,
        OperationKind::Summarize,
        OperationKind::DetectIntent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Classify => "classify",
            OperationKind::Sentiment => "sentiment",
            OperationKind::Summarize => "summarize",
            OperationKind::DetectIntent => "intent",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A result schema produced by exactly one [`OperationKind`].
///
/// Implementors decode strictly: every declared field is required and
/// unknown fields are rejected.
pub trait AnalysisResult: DeserializeOwned + Serialize + Send + 'static {
    const KIND: OperationKind;
}
