/// Free-form text submitted for analysis. The empty string is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    text: String,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
