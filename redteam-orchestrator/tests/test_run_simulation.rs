//! Use case tests for the simulation pipeline and history statistics

mod common;

use common::fixtures::{ScriptedProvider, cargo_target, test_config, test_state};
use redteam_core::domain::{Complexity, ScenarioStatus, Target};
use redteam_llm::LlmError;
use redteam_orchestrator::{DashboardData, SimulationError};
use std::sync::Arc;

fn target() -> Target {
    Target::from_value(cargo_target()).unwrap()
}

#[tokio::test]
async fn test_generate_simulate_analyze_and_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let provider = Arc::new(ScriptedProvider::new());
    let state = test_state(&config, provider.clone());

    let scenario = state
        .run_simulation
        .execute(&target(), Complexity::Medium)
        .await
        .unwrap();

    assert_eq!(scenario.status, ScenarioStatus::Analyzed);
    assert_eq!(scenario.plan.steps.len(), 3);
    assert!((1..=3).contains(&scenario.steps_executed()));
    assert_eq!(
        scenario.overall_success,
        scenario.simulation_results.iter().any(|r| r.success)
    );
    let analysis = scenario.vulnerability_analysis.as_ref().unwrap();
    assert_eq!(analysis.severity, "Critical");
    assert_eq!(provider.calls(), 2);

    let history = state.history.all().await;
    assert_eq!(history, vec![scenario]);
}

#[tokio::test]
async fn test_fixed_seed_reproduces_step_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let first = test_state(&config, Arc::new(ScriptedProvider::new()))
        .run_simulation
        .execute(&target(), Complexity::High)
        .await
        .unwrap();
    let second = test_state(&config, Arc::new(ScriptedProvider::new()))
        .run_simulation
        .execute(&target(), Complexity::High)
        .await
        .unwrap();

    assert_eq!(first.simulation_results, second.simulation_results);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_generation_failure_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let provider = Arc::new(ScriptedProvider::failing(LlmError::auth("invalid x-api-key")));
    let state = test_state(&config, provider.clone());

    let err = state
        .run_simulation
        .execute(&target(), Complexity::Low)
        .await
        .unwrap_err();

    assert!(matches!(err, SimulationError::Generation(LlmError::Authentication(_))));
    assert_eq!(provider.calls(), 1);
    assert!(state.history.is_empty().await);
}

#[tokio::test]
async fn test_analysis_failure_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let provider = Arc::new(ScriptedProvider::failing_analysis(LlmError::timeout(30)));
    let state = test_state(&config, provider.clone());

    let err = state
        .run_simulation
        .execute(&target(), Complexity::Medium)
        .await
        .unwrap_err();

    assert!(matches!(err, SimulationError::Analysis(LlmError::Timeout { seconds: 30 })));
    assert_eq!(provider.calls(), 2);
    assert!(state.history.is_empty().await);
}

#[tokio::test]
async fn test_review_of_empty_history_skips_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let provider = Arc::new(ScriptedProvider::new());
    let state = test_state(&config, provider.clone());

    let err = state.review_history.execute().await.unwrap_err();

    assert!(err.is_empty_history());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_review_splits_report_sections() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let state = test_state(&config, Arc::new(ScriptedProvider::new()));
    state
        .run_simulation
        .execute(&target(), Complexity::Medium)
        .await
        .unwrap();

    let report = state.review_history.execute().await.unwrap();

    assert_eq!(report.scenario_count, 1);
    assert_eq!(
        report.key_findings.items,
        vec!["GNSS spoofing worked against cargo vessels"]
    );
    assert_eq!(report.risk_assessment.text, "Overall risk is high.");
}

#[tokio::test]
async fn test_dashboard_written_to_visualizations_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let state = test_state(&config, Arc::new(ScriptedProvider::new()));

    assert!(
        state
            .statistics
            .write_dashboard(&config.simulation.visualizations_dir)
            .await
            .unwrap_err()
            .is_empty_history()
    );

    state
        .run_simulation
        .execute(&target(), Complexity::Medium)
        .await
        .unwrap();
    let path = state
        .statistics
        .write_dashboard(&config.simulation.visualizations_dir)
        .await
        .unwrap();

    assert_eq!(path, config.simulation.visualizations_dir.join("dashboard.json"));
    let dashboard: DashboardData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(dashboard.metrics.total_simulations, 1);
    assert_eq!(dashboard.metrics.attack_vectors["GNSS spoofing"], 1);
}
