//! Use case for reviewing the whole scenario history in one model call

use std::sync::Arc;

use redteam_core::config::LlmConfig;
use redteam_core::domain::{HistoryReport, Scenario};
use tracing::info;

use crate::domain::{CompletionRequest, LlmError, LlmProvider};
use crate::infrastructure::prompts::{ANALYSIS_SYSTEM_PROMPT, PromptBuilder};
use crate::infrastructure::report_parser::{HeadingSectionParser, ReportParser};

pub struct AnalyzeHistoryUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
    parser: Arc<dyn ReportParser>,
}

impl AnalyzeHistoryUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self::with_parser(provider, config, Arc::new(HeadingSectionParser))
    }

    pub fn with_parser(
        provider: Arc<dyn LlmProvider>,
        config: LlmConfig,
        parser: Arc<dyn ReportParser>,
    ) -> Self {
        Self {
            provider,
            config,
            parser,
        }
    }

    pub async fn execute(&self, scenarios: &[Scenario]) -> Result<HistoryReport, LlmError> {
        if scenarios.is_empty() {
            return Err(LlmError::InvalidRequest(
                "No simulation results to analyze".to_string(),
            ));
        }

        info!(scenarios = scenarios.len(), "Analyzing simulation history");

        let request = CompletionRequest::new()
            .with_system(ANALYSIS_SYSTEM_PROMPT)
            .with_user(PromptBuilder::build_history_prompt(scenarios))
            .with_model(&self.config.default_model)
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.analysis_temperature);

        let response = self.provider.complete(request).await?;

        let mut report = self.parser.parse(&response.text());
        report.scenario_count = scenarios.len();
        Ok(report)
    }
}
