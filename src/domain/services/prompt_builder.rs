use crate::domain::OperationKind;

const JSON_ONLY_DIRECTIVE: &str =
    "Respond with ONLY valid JSON, no additional text or explanation.";

/// Label preceding the sample object in every prompt.
pub const SAMPLE_HEADER: &str = "Return JSON in this exact format:\n";

fn task_description(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Classify => {
            "Analyze the following text and classify it with appropriate labels and tags."
        }
        OperationKind::Sentiment => "Analyze the sentiment of the following text.",
        OperationKind::Summarize => "Summarize the following text concisely.",
        OperationKind::DetectIntent => "Detect the intent behind the following text.",
    }
}

/// Sample reply for `kind`, listing every field of its result schema.
pub fn sample_json(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Classify => {
            r#"{"labels": ["label1", "label2"], "primaryCategory": "category", "confidence": 0.9}"#
        }
        OperationKind::Sentiment => {
            r#"{"overallSentiment": "positive", "sentimentScore": 0.8, "emotions": ["joy", "excitement"], "confidence": 0.9}"#
        }
        OperationKind::Summarize => {
            r#"{"summary": "your summary here", "keyPoints": ["point1", "point2", "point3"], "wordCount": 25}"#
        }
        OperationKind::DetectIntent => {
            r#"{"primaryIntent": "main_intent", "secondaryIntents": ["intent1", "intent2"], "intentCategory": "question", "confidence": 0.9}"#
        }
    }
}

/// Build the instruction sent to the model for `kind`.
///
/// `text` is embedded verbatim after the `Text:` label. It is not escaped or
/// quoted; the model reads it as the document under analysis.
pub fn build_prompt(kind: OperationKind, text: &str) -> String {
    format!(
        "{} {}\n\nText: {}\n\n{}{}",
        task_description(kind),
        JSON_ONLY_DIRECTIVE,
        text,
        SAMPLE_HEADER,
        sample_json(kind)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prompt_matches_template() {
        let prompt = build_prompt(OperationKind::Classify, "AI is transforming healthcare");
        assert_eq!(
            prompt,
            "Analyze the following text and classify it with appropriate labels and tags. \
             Respond with ONLY valid JSON, no additional text or explanation.\n\n\
             Text: AI is transforming healthcare\n\n\
             Return JSON in this exact format:\n\
             {\"labels\": [\"label1\", \"label2\"], \"primaryCategory\": \"category\", \"confidence\": 0.9}"
        );
    }

    #[test]
    fn every_prompt_demands_json_only() {
        for kind in OperationKind::ALL {
            let prompt = build_prompt(kind, "hello");
            assert!(prompt.contains(JSON_ONLY_DIRECTIVE), "{kind} prompt lacks directive");
            assert!(prompt.ends_with(sample_json(kind)));
        }
    }

    #[test]
    fn samples_name_every_schema_field() {
        let expected: [(OperationKind, &[&str]); 4] = [
            (OperationKind::Classify, &["labels", "primaryCategory", "confidence"]),
            (
                OperationKind::Sentiment,
                &["overallSentiment", "sentimentScore", "emotions", "confidence"],
            ),
            (OperationKind::Summarize, &["summary", "keyPoints", "wordCount"]),
            (
                OperationKind::DetectIntent,
                &["primaryIntent", "secondaryIntents", "intentCategory", "confidence"],
            ),
        ];

        for (kind, fields) in expected {
            let sample: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(sample_json(kind)).unwrap();
            let mut keys: Vec<&str> = sample.keys().map(String::as_str).collect();
            let mut fields = fields.to_vec();
            keys.sort_unstable();
            fields.sort_unstable();
            assert_eq!(keys, fields, "sample for {kind}");
        }
    }

    #[test]
    fn text_is_embedded_without_escaping() {
        let text = "He said \"hi\"\n{\"labels\": []}";
        let prompt = build_prompt(OperationKind::Sentiment, text);
        assert!(prompt.contains(&format!("Text: {text}\n\n")));
    }

    #[test]
    fn empty_text_is_accepted() {
        let prompt = build_prompt(OperationKind::Summarize, "");
        assert!(prompt.contains("Text: \n\n"));
    }
}
