//! Unit tests for GenerateScenarioUseCase

use redteam_core::domain::{Complexity, ScenarioStatus};
use redteam_llm::LlmError;
use redteam_llm::application::use_cases::GenerateScenarioUseCase;
use rstest::rstest;
use std::sync::Arc;

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

use common::{MockLlmProvider, cargo_vessel, create_test_config};

#[tokio::test]
async fn test_generate_scenario_from_json_reply() {
    let reply = r#"{
        "attack_vector": "Spear-phishing the master's email",
        "steps": [
            "Harvest crew list from social media",
            "Send malicious port notice",
            "Pivot to bridge network",
            "Alter ECDIS route"
        ],
        "impact": "Critical",
        "indicators": ["Unexpected route changes", "Outbound traffic from bridge PC"],
        "attacker_profile": { "resources": "High", "skills": "Expert" }
    }"#;

    let provider = Arc::new(MockLlmProvider::with_text_response(reply));
    let use_case = GenerateScenarioUseCase::new(provider.clone(), create_test_config());

    let scenario = use_case
        .execute(&cargo_vessel(), Complexity::Medium)
        .await
        .unwrap();

    assert_eq!(scenario.status, ScenarioStatus::Generated);
    assert_eq!(scenario.complexity, Complexity::Medium);
    assert_eq!(scenario.plan.attack_vector, "Spear-phishing the master's email");
    assert_eq!(scenario.plan.steps.len(), 4);
    assert_eq!(scenario.plan.attacker_profile.skills, "Expert");
    assert!(scenario.simulation_results.is_empty());
    assert!(!scenario.overall_success);
}

#[tokio::test]
async fn test_request_carries_scenario_settings() {
    let provider = Arc::new(MockLlmProvider::with_text_response("{}"));
    let use_case = GenerateScenarioUseCase::new(provider.clone(), create_test_config());

    use_case
        .execute(&cargo_vessel(), Complexity::Critical)
        .await
        .unwrap();

    let request = provider.last_request().await;
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.max_tokens, Some(2000));
    assert_eq!(request.model.as_deref(), Some("test-model"));
    assert!(
        request
            .system_prompt()
            .unwrap()
            .starts_with("You are an expert red team security analyst")
    );

    let prompt = request.last_user_text().unwrap();
    assert!(prompt.contains("- mmsi: 366999999"));
    assert!(prompt.contains("- vessel_type: Cargo"));
    assert!(prompt.contains("Complexity level: critical"));
}

#[rstest]
#[case("")]
#[case("I'm sorry, I can't help with that.")]
#[case("[1, 2, 3]")]
#[case("{\"unrelated\": true}")]
#[tokio::test]
async fn test_unusable_reply_yields_placeholder_plan(#[case] reply: &str) {
    let provider = Arc::new(MockLlmProvider::with_text_response(reply));
    let use_case = GenerateScenarioUseCase::new(provider, create_test_config());

    let scenario = use_case
        .execute(&cargo_vessel(), Complexity::Low)
        .await
        .unwrap();

    assert_eq!(scenario.plan, GenerateScenarioUseCase::placeholder_plan());
    assert_eq!(scenario.plan.attack_vector, "Example attack vector");
    assert_eq!(scenario.plan.steps, vec!["Step 1", "Step 2", "Step 3"]);
    assert_eq!(scenario.plan.impact, "Critical");
}

#[test]
fn test_lenient_field_coercion() {
    let reply = r#"Here is the scenario:
```json
{
  "Attack Vector": { "method": "Rogue AIS base station" },
  "Step-by-step attack progression": [
    { "step": 1, "description": "Deploy SDR near port" },
    { "step": 2, "description": "Broadcast ghost vessels" }
  ],
  "Potential Impact": "High",
  "Indicators of Compromise": "1. Duplicate MMSIs\n2. Impossible vessel speeds",
  "Required attacker resources and skills": "Moderate RF expertise"
}
```"#;

    let plan = GenerateScenarioUseCase::parse_plan(reply);

    assert_eq!(plan.attack_vector, "Rogue AIS base station");
    assert_eq!(
        plan.steps,
        vec!["Deploy SDR near port", "Broadcast ghost vessels"]
    );
    assert_eq!(plan.impact, "High");
    assert_eq!(
        plan.indicators,
        vec!["Duplicate MMSIs", "Impossible vessel speeds"]
    );
    assert_eq!(plan.attacker_profile.skills, "Moderate RF expertise");
    assert_eq!(plan.attacker_profile.resources, "Medium");
}

#[test]
fn test_empty_step_list_is_replaced() {
    let plan = GenerateScenarioUseCase::parse_plan(
        r#"{"attack_vector": "Insider", "steps": [], "impact": "Low"}"#,
    );
    assert_eq!(plan.attack_vector, "Insider");
    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.impact, "Low");
}

#[tokio::test]
async fn test_provider_error_is_surfaced() {
    let provider = Arc::new(
        MockLlmProvider::new().with_error(LlmError::auth("invalid x-api-key")),
    );
    let use_case = GenerateScenarioUseCase::new(provider, create_test_config());

    let err = use_case
        .execute(&cargo_vessel(), Complexity::Medium)
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Authentication(_)));
}
