use anyhow::Result;
use serde::Serialize;

use crate::{AnalysisInput, AnalysisResult};

use super::super::Container;

pub struct AnalysisController<'a> {
    container: &'a Container,
}

impl<'a> AnalysisController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Run the operation whose result type is `R` and render it as pretty JSON.
    pub async fn analyze<R: AnalysisResult>(&self, text: String) -> Result<String> {
        let use_case = self.container.analyze_use_case();
        let result: R = use_case.execute(&AnalysisInput::new(text)).await?;
        self.format_result(&result)
    }

    fn format_result<T: Serialize>(&self, result: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
