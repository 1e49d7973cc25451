//! Unit tests for AnalyzeVulnerabilityUseCase

use redteam_llm::LlmError;
use redteam_llm::application::use_cases::AnalyzeVulnerabilityUseCase;
use std::sync::Arc;

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

use common::{MockLlmProvider, create_test_config, simulated_scenario, system_details};

#[tokio::test]
async fn test_analysis_from_json_reply() {
    let reply = r#"{
        "severity": "Critical",
        "explanation": "ECDIS accepts unsigned chart updates.",
        "mitigations": ["Verify chart signatures", "Disable USB ports on bridge PCs"],
        "long_term_fixes": ["Segment bridge network from crew Wi-Fi"],
        "detection_methods": ["Monitor route deviations"]
    }"#;

    let provider = Arc::new(MockLlmProvider::with_text_response(reply));
    let use_case = AnalyzeVulnerabilityUseCase::new(provider.clone(), create_test_config());

    let analysis = use_case
        .execute(&simulated_scenario(), &system_details())
        .await
        .unwrap();

    assert_eq!(analysis.severity, "Critical");
    assert_eq!(analysis.mitigations.len(), 2);
    assert_eq!(analysis.long_term_fixes, vec!["Segment bridge network from crew Wi-Fi"]);

    let request = provider.last_request().await;
    assert_eq!(request.temperature, Some(0.2));
    let prompt = request.last_user_text().unwrap();
    assert!(prompt.contains("ECDIS malware via chart update USB"));
    assert!(prompt.contains("- detailed_systems:"));
    assert!(prompt.contains("\"patch_level\":\"P7\""));
}

#[test]
fn test_nested_assessment_severity() {
    let analysis = AnalyzeVulnerabilityUseCase::parse_analysis(
        r#"{
            "vulnerability_assessment": { "Severity": "Medium", "exploitability": "Low" },
            "technical_explanation": "Weak authentication on VSAT terminal",
            "defensive_measures": "- Change default credentials\n- Enable MFA"
        }"#,
    );

    assert_eq!(analysis.severity, "Medium");
    assert_eq!(analysis.explanation, "Weak authentication on VSAT terminal");
    assert_eq!(
        analysis.mitigations,
        vec!["Change default credentials", "Enable MFA"]
    );
    assert_eq!(analysis.detection_methods, vec!["Detection 1", "Detection 2"]);
}

#[test]
fn test_prose_reply_yields_placeholder() {
    let analysis = AnalyzeVulnerabilityUseCase::parse_analysis("Severity is probably high.");
    assert_eq!(analysis, AnalyzeVulnerabilityUseCase::placeholder_analysis());
    assert!(!analysis.severity.is_empty());
}

#[tokio::test]
async fn test_provider_error_is_surfaced() {
    let provider = Arc::new(
        MockLlmProvider::new().with_error(LlmError::ServiceUnavailable("overloaded".into())),
    );
    let use_case = AnalyzeVulnerabilityUseCase::new(provider, create_test_config());

    let result = use_case
        .execute(&simulated_scenario(), &system_details())
        .await;

    assert!(matches!(result, Err(LlmError::ServiceUnavailable(_))));
}
