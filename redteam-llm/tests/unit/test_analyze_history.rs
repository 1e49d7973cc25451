//! Unit tests for AnalyzeHistoryUseCase

use redteam_core::domain::{HistoryReport, ReportSection};
use redteam_llm::application::use_cases::AnalyzeHistoryUseCase;
use redteam_llm::{LlmError, ReportParser};
use std::sync::Arc;

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

use common::{MockLlmProvider, create_test_config, simulated_scenario};

#[tokio::test]
async fn test_history_report_sections() {
    let reply = "Key Findings\n- 1 of 2 simulations succeeded\nAttack Patterns\nSupply chain first.\nRisk Assessment\n- High";
    let provider = Arc::new(MockLlmProvider::with_text_response(reply));
    let use_case = AnalyzeHistoryUseCase::new(provider.clone(), create_test_config());

    let history = vec![simulated_scenario(), simulated_scenario()];
    let report = use_case.execute(&history).await.unwrap();

    assert_eq!(report.scenario_count, 2);
    assert_eq!(report.key_findings.items, vec!["1 of 2 simulations succeeded"]);
    assert_eq!(report.attack_patterns.text, "Supply chain first.");
    assert_eq!(report.risk_assessment.items, vec!["High"]);
    assert!(report.defense_recommendations.is_empty());

    let prompt = provider.last_request().await.last_user_text().unwrap();
    assert!(prompt.contains("Simulation 1:"));
    assert!(prompt.contains("Simulation 2:"));
    assert!(prompt.contains("steps executed: 2/3 (1 succeeded)"));
}

#[tokio::test]
async fn test_empty_history_is_rejected_without_call() {
    let provider = Arc::new(MockLlmProvider::with_text_response("unused"));
    let use_case = AnalyzeHistoryUseCase::new(provider.clone(), create_test_config());

    let err = use_case.execute(&[]).await.unwrap_err();

    assert!(matches!(err, LlmError::InvalidRequest(_)));
    assert!(provider.captured_requests.lock().await.is_empty());
}

struct FixedParser;

impl ReportParser for FixedParser {
    fn parse(&self, text: &str) -> HistoryReport {
        HistoryReport {
            key_findings: ReportSection {
                text: text.to_uppercase(),
                items: vec![],
            },
            raw_response: text.to_string(),
            ..HistoryReport::default()
        }
    }
}

#[tokio::test]
async fn test_custom_parser_is_used() {
    let provider = Arc::new(MockLlmProvider::with_text_response("all quiet"));
    let use_case =
        AnalyzeHistoryUseCase::with_parser(provider, create_test_config(), Arc::new(FixedParser));

    let report = use_case.execute(&[simulated_scenario()]).await.unwrap();

    assert_eq!(report.key_findings.text, "ALL QUIET");
    assert_eq!(report.scenario_count, 1);
}
