use thiserror::Error;

/// The model reply could not be interpreted as the expected structured result.
///
/// `raw` is the reply exactly as the chat client returned it, before any
/// whitespace trimming or fence stripping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse AI response as JSON: {raw}")]
pub struct ExtractionError {
    raw: String,
    reason: String,
}

impl ExtractionError {
    pub fn new(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Decoder message describing what went wrong.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn extraction(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extraction(ExtractionError::new(raw, reason))
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_error_displays_original_reply() {
        let err = ExtractionError::new("This is not valid JSON", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Failed to parse AI response as JSON: This is not valid JSON"
        );
        assert_eq!(err.raw(), "This is not valid JSON");
    }

    #[test]
    fn domain_error_is_transparent_over_extraction() {
        let err = DomainError::extraction("oops", "eof");
        assert!(err.is_extraction());
        assert!(!err.is_upstream());
        assert_eq!(err.to_string(), "Failed to parse AI response as JSON: oops");
    }

    #[test]
    fn upstream_error_keeps_message() {
        let err = DomainError::upstream("connection refused");
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "Upstream error: connection refused");
    }

    #[test]
    fn configuration_error_is_neither_extraction_nor_upstream() {
        let err = DomainError::configuration("no TLS backend");
        assert!(!err.is_extraction());
        assert!(!err.is_upstream());
        assert_eq!(err.to_string(), "Configuration error: no TLS backend");
    }
}
