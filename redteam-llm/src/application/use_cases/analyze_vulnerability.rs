//! Use case for analyzing a simulated scenario against synthetic system details

use std::sync::Arc;

use redteam_core::config::LlmConfig;
use redteam_core::domain::{Scenario, SystemDetails, VulnerabilityAnalysis};
use serde_json::Value;
use tracing::{info, warn};

use crate::application::normalize::{normalize_keys, pick, to_list, to_text};
use crate::domain::{CompletionRequest, LlmError, LlmProvider};
use crate::infrastructure::prompts::{ANALYSIS_SYSTEM_PROMPT, PromptBuilder};
use crate::infrastructure::response_parser::ResponseParser;

const SEVERITY_KEYS: [&str; 4] = ["severity", "severity_level", "risk_level", "risk"];
const ASSESSMENT_KEYS: [&str; 2] = ["vulnerability_assessment", "assessment"];
const EXPLANATION_KEYS: [&str; 4] = [
    "explanation",
    "technical_explanation",
    "technical_explanation_of_how_the_vulnerability_works",
    "description",
];
const MITIGATION_KEYS: [&str; 4] = [
    "mitigations",
    "mitigation",
    "defensive_measures",
    "specific_defensive_measures",
];
const LONG_TERM_KEYS: [&str; 4] = [
    "long_term_fixes",
    "long_term_security_improvements",
    "long_term_improvements",
    "improvements",
];
const DETECTION_KEYS: [&str; 3] = ["detection_methods", "detection", "detection_method"];

/// Produces a [`VulnerabilityAnalysis`] for one scenario.
///
/// The returned analysis always has every field populated.
pub struct AnalyzeVulnerabilityUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
}

impl AnalyzeVulnerabilityUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    pub async fn execute(
        &self,
        scenario: &Scenario,
        details: &SystemDetails,
    ) -> Result<VulnerabilityAnalysis, LlmError> {
        info!(
            scenario_id = %scenario.id,
            subsystems = details.detailed_systems.len(),
            "Analyzing scenario vulnerabilities"
        );

        let request = CompletionRequest::new()
            .with_system(ANALYSIS_SYSTEM_PROMPT)
            .with_user(PromptBuilder::build_vulnerability_prompt(scenario, details))
            .with_model(&self.config.default_model)
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.analysis_temperature);

        let response = self.provider.complete(request).await?;
        Ok(Self::parse_analysis(&response.text()))
    }

    pub fn parse_analysis(text: &str) -> VulnerabilityAnalysis {
        let placeholder = Self::placeholder_analysis();

        let map = match ResponseParser::parse_object(text) {
            Ok(map) => normalize_keys(map),
            Err(e) => {
                warn!(error = %e, "Analysis reply is not JSON, using placeholder analysis");
                return placeholder;
            }
        };

        // Severity may sit inside a nested assessment object
        let severity = pick(&map, &SEVERITY_KEYS)
            .and_then(to_text)
            .or_else(|| match pick(&map, &ASSESSMENT_KEYS) {
                Some(Value::Object(inner)) => {
                    pick(&normalize_keys(inner.clone()), &SEVERITY_KEYS).and_then(to_text)
                }
                Some(other) => to_text(other),
                None => None,
            });

        let explanation = pick(&map, &EXPLANATION_KEYS).and_then(to_text);
        let mitigations = pick(&map, &MITIGATION_KEYS).and_then(to_list);
        let long_term_fixes = pick(&map, &LONG_TERM_KEYS).and_then(to_list);
        let detection_methods = pick(&map, &DETECTION_KEYS).and_then(to_list);

        if severity.is_none() || explanation.is_none() {
            warn!(
                has_severity = severity.is_some(),
                has_explanation = explanation.is_some(),
                "Analysis reply incomplete, using placeholders for missing fields"
            );
        }

        VulnerabilityAnalysis {
            severity: severity.unwrap_or(placeholder.severity),
            explanation: explanation.unwrap_or(placeholder.explanation),
            mitigations: mitigations.unwrap_or(placeholder.mitigations),
            long_term_fixes: long_term_fixes.unwrap_or(placeholder.long_term_fixes),
            detection_methods: detection_methods.unwrap_or(placeholder.detection_methods),
        }
    }

    pub fn placeholder_analysis() -> VulnerabilityAnalysis {
        VulnerabilityAnalysis {
            severity: "High".to_string(),
            explanation: "Technical explanation of vulnerability".to_string(),
            mitigations: vec!["Mitigation 1".to_string(), "Mitigation 2".to_string()],
            long_term_fixes: vec!["Fix 1".to_string(), "Fix 2".to_string()],
            detection_methods: vec!["Detection 1".to_string(), "Detection 2".to_string()],
        }
    }
}
