use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::ExtractionError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Remove surrounding whitespace and markdown code-fence markers from a model reply.
///
/// The tagged opening marker is checked before the bare one, otherwise the bare
/// marker would match and leave `json` behind. The closing marker is stripped
/// whether or not an opening marker was present.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut cleaned = raw.trim();

    if let Some(rest) = cleaned.strip_prefix(JSON_FENCE) {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = rest;
    }

    if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }

    cleaned.trim()
}

/// Decode a model reply into `T`.
///
/// The cleaned reply must be a single JSON object whose fields match `T`
/// exactly; result schemas reject unknown fields and require every declared
/// one. Any failure carries the reply as it was received.
pub fn extract<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractionError> {
    let cleaned = strip_code_fences(raw);

    let object: Map<String, Value> =
        serde_json::from_str(cleaned).map_err(|e| ExtractionError::new(raw, e.to_string()))?;

    serde_json::from_value(Value::Object(object))
        .map_err(|e| ExtractionError::new(raw, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClassificationResult, SentimentResult, SummaryResult};

    #[test]
    fn strips_tagged_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn strips_trailing_fence_without_leading_one() {
        assert_eq!(strip_code_fences("{\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn strips_leading_fence_without_trailing_one() {
        assert_eq!(strip_code_fences("```json {\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn trims_whitespace_inside_and_outside_fences() {
        assert_eq!(
            strip_code_fences(" \t\n```json \r\n  {\"a\": 1} \n\t```\n\n "),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("This is not valid JSON"), "This is not valid JSON");
    }

    #[test]
    fn strips_only_one_marker_per_side() {
        assert_eq!(strip_code_fences("``````"), "");
        assert_eq!(strip_code_fences("```json```json"), "```json");
    }

    #[test]
    fn bare_fence_alone_becomes_empty() {
        assert_eq!(strip_code_fences("```"), "");
    }

    #[test]
    fn extracts_plain_object() {
        let result: ClassificationResult = extract(
            r#"{"labels": ["technology", "AI"], "primaryCategory": "technology", "confidence": 0.95}"#,
        )
        .unwrap();
        assert_eq!(result.labels(), ["technology", "AI"]);
        assert_eq!(result.primary_category(), "technology");
        assert_eq!(result.confidence(), 0.95);
    }

    #[test]
    fn rejects_unknown_field() {
        let raw = r#"{"labels": [], "primaryCategory": "x", "confidence": 0.5, "extra": true}"#;
        let err = extract::<ClassificationResult>(raw).unwrap_err();
        assert_eq!(err.raw(), raw);
        assert!(err.reason().contains("extra"), "reason: {}", err.reason());
    }

    #[test]
    fn rejects_missing_field() {
        let raw = r#"{"labels": [], "primaryCategory": "x"}"#;
        let err = extract::<ClassificationResult>(raw).unwrap_err();
        assert!(err.reason().contains("confidence"), "reason: {}", err.reason());
    }

    #[test]
    fn rejects_type_mismatch() {
        let raw = r#"{"summary": "s", "keyPoints": [], "wordCount": "twenty"}"#;
        assert!(extract::<SummaryResult>(raw).is_err());
    }

    #[test]
    fn rejects_null_sequence() {
        let raw = r#"{"labels": null, "primaryCategory": "x", "confidence": 0.5}"#;
        assert!(extract::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let raw = r#"{"labels": [], "PrimaryCategory": "x", "confidence": 0.5}"#;
        assert!(extract::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn rejects_array_shaped_reply() {
        let raw = r#"[["news"], "news", 0.8]"#;
        assert!(extract::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn rejects_trailing_prose() {
        let raw = r#"{"labels": [], "primaryCategory": "x", "confidence": 0.5} Hope this helps!"#;
        assert!(extract::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn failure_keeps_original_reply_not_cleaned_one() {
        let raw = "  ```json\nnot json\n```  ";
        let err = extract::<SentimentResult>(raw).unwrap_err();
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn preserves_sequence_order_and_duplicates() {
        let raw = r#"{"summary": "s", "keyPoints": ["b", "a", "b"], "wordCount": 3}"#;
        let result: SummaryResult = extract(raw).unwrap();
        assert_eq!(result.key_points(), ["b", "a", "b"]);
    }

    #[test]
    fn does_not_clamp_numeric_ranges() {
        let raw = r#"{"overallSentiment": "ecstatic", "sentimentScore": 4.5, "emotions": [], "confidence": -2.0}"#;
        let result: SentimentResult = extract(raw).unwrap();
        assert_eq!(result.overall_sentiment(), "ecstatic");
        assert_eq!(result.sentiment_score(), 4.5);
        assert_eq!(result.confidence(), -2.0);
    }
}
