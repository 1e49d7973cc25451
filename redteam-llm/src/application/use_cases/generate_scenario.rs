//! Use case for generating an attack scenario against a target

use std::sync::Arc;

use redteam_core::config::LlmConfig;
use redteam_core::domain::{AttackPlan, AttackerProfile, Complexity, Scenario, Target};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::application::normalize::{normalize_keys, pick, to_list, to_text};
use crate::domain::{CompletionRequest, LlmError, LlmProvider};
use crate::infrastructure::prompts::{PromptBuilder, SCENARIO_SYSTEM_PROMPT};
use crate::infrastructure::response_parser::ResponseParser;

const ATTACK_VECTOR_KEYS: [&str; 5] = [
    "attack_vector",
    "attack_vector_and_initial_access",
    "attack_vector_and_initial_access_method",
    "initial_access",
    "vector",
];
const STEPS_KEYS: [&str; 5] = [
    "steps",
    "attack_steps",
    "attack_progression",
    "step_by_step_attack_progression",
    "progression",
];
const IMPACT_KEYS: [&str; 3] = ["impact", "potential_impact", "potential_impact_if_successful"];
const INDICATOR_KEYS: [&str; 4] = [
    "indicators",
    "indicators_of_compromise",
    "iocs",
    "ioc",
];
const PROFILE_KEYS: [&str; 4] = [
    "attacker_profile",
    "required_attacker_resources_and_skills",
    "attacker_resources_and_skills",
    "attacker",
];

/// Generates a [`Scenario`] by asking the model for an attack plan.
///
/// Provider failures are returned as errors. A reply that cannot be read as a
/// plan never is: missing fields are filled with placeholder content.
pub struct GenerateScenarioUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
}

impl GenerateScenarioUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    pub async fn execute(
        &self,
        target: &Target,
        complexity: Complexity,
    ) -> Result<Scenario, LlmError> {
        info!(
            target = %target.identifier(),
            kind = %target.kind(),
            complexity = %complexity,
            "Generating attack scenario"
        );

        let request = CompletionRequest::new()
            .with_system(SCENARIO_SYSTEM_PROMPT)
            .with_user(PromptBuilder::build_scenario_prompt(target, complexity))
            .with_model(&self.config.default_model)
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.scenario_temperature);

        let response = self.provider.complete(request).await?;
        debug!(
            completion_tokens = response.usage.completion_tokens,
            truncated = response.is_truncated(),
            "Scenario completion received"
        );

        let plan = Self::parse_plan(&response.text());
        Ok(Scenario::new(target.clone(), complexity, plan))
    }

    /// Coerce a model reply into an [`AttackPlan`], field by field
    pub fn parse_plan(text: &str) -> AttackPlan {
        let placeholder = Self::placeholder_plan();

        let map = match ResponseParser::parse_object(text) {
            Ok(map) => normalize_keys(map),
            Err(e) => {
                warn!(error = %e, "Scenario reply is not JSON, using placeholder plan");
                return placeholder;
            }
        };

        let attack_vector = pick(&map, &ATTACK_VECTOR_KEYS).and_then(to_text);
        let steps = pick(&map, &STEPS_KEYS).and_then(to_list);
        let impact = pick(&map, &IMPACT_KEYS).and_then(to_text);
        let indicators = pick(&map, &INDICATOR_KEYS).and_then(to_list);
        let attacker_profile = pick(&map, &PROFILE_KEYS).and_then(Self::parse_profile);

        let missing: Vec<&str> = [
            ("attack_vector", attack_vector.is_none()),
            ("steps", steps.is_none()),
            ("impact", impact.is_none()),
            ("indicators", indicators.is_none()),
            ("attacker_profile", attacker_profile.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();
        if !missing.is_empty() {
            warn!(fields = ?missing, "Scenario reply missing fields, using placeholders");
        }

        AttackPlan {
            attack_vector: attack_vector.unwrap_or(placeholder.attack_vector),
            steps: steps.unwrap_or(placeholder.steps),
            impact: impact.unwrap_or(placeholder.impact),
            indicators: indicators.unwrap_or(placeholder.indicators),
            attacker_profile: attacker_profile.unwrap_or(placeholder.attacker_profile),
        }
    }

    fn parse_profile(value: &Value) -> Option<AttackerProfile> {
        let defaults = Self::placeholder_plan().attacker_profile;
        match value {
            Value::Object(map) => {
                let map: Map<String, Value> = normalize_keys(map.clone());
                let resources = pick(&map, &["resources", "required_resources", "resource_level"])
                    .and_then(to_text);
                let skills = pick(&map, &["skills", "required_skills", "skill_level", "skill"])
                    .and_then(to_text);
                if resources.is_none() && skills.is_none() {
                    return None;
                }
                Some(AttackerProfile {
                    resources: resources.unwrap_or(defaults.resources),
                    skills: skills.unwrap_or(defaults.skills),
                })
            }
            other => to_text(other).map(|skills| AttackerProfile {
                resources: defaults.resources,
                skills,
            }),
        }
    }

    pub fn placeholder_plan() -> AttackPlan {
        AttackPlan {
            attack_vector: "Example attack vector".to_string(),
            steps: vec![
                "Step 1".to_string(),
                "Step 2".to_string(),
                "Step 3".to_string(),
            ],
            impact: "Critical".to_string(),
            indicators: vec!["IOC 1".to_string(), "IOC 2".to_string()],
            attacker_profile: AttackerProfile {
                resources: "Medium".to_string(),
                skills: "Advanced".to_string(),
            },
        }
    }
}
