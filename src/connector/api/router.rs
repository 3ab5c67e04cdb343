use anyhow::Result;

use crate::{ClassificationResult, Commands, IntentResult, SentimentResult, SummaryResult};

use super::container::Container;
use super::controller::AnalysisController;

pub struct Router<'a> {
    analysis_controller: AnalysisController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analysis_controller: AnalysisController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Classify { text } => {
                self.analysis_controller
                    .analyze::<ClassificationResult>(text)
                    .await
            }
            Commands::Sentiment { text } => {
                self.analysis_controller.analyze::<SentimentResult>(text).await
            }
            Commands::Summarize { text } => {
                self.analysis_controller.analyze::<SummaryResult>(text).await
            }
            Commands::Intent { text } => self.analysis_controller.analyze::<IntentResult>(text).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
