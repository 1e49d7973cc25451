//! Scripted model provider, failing dataset source and app state builders

use async_trait::async_trait;
use axum_test::TestServer;
use redteam_core::Config;
use redteam_llm::domain::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider, ProviderInfo,
    StopReason, Usage,
};
use redteam_osint::{DatasetSource, FetchError, TargetProvider};
use redteam_orchestrator::{AppState, create_router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SCENARIO_REPLY: &str = r#"{
    "attack_vector": "GNSS spoofing",
    "steps": ["Survey AIS traffic", "Spoof GNSS fixes", "Divert the vessel"],
    "impact": "High",
    "indicators": ["Position jumps", "Clock drift"],
    "attacker_profile": {"resources": "High", "skills": "Expert"}
}"#;

pub const ANALYSIS_REPLY: &str = r#"{
    "severity": "Critical",
    "explanation": "Unauthenticated GNSS input drives the autopilot.",
    "mitigations": ["Cross-check GNSS with radar"],
    "long_term_fixes": ["Authenticated positioning"],
    "detection_methods": ["Position plausibility checks"]
}"#;

pub const HISTORY_REPLY: &str = "Key Findings
Navigation attacks succeed early.
- GNSS spoofing worked against cargo vessels

Risk Assessment
Overall risk is high.
";

/// Provider that answers by prompt type
pub struct ScriptedProvider {
    pub error: Option<LlmError>,
    pub analysis_error: Option<LlmError>,
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            error: None,
            analysis_error: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    /// Only vulnerability analysis calls fail
    pub fn failing_analysis(error: LlmError) -> Self {
        Self {
            analysis_error: Some(error),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: "scripted",
            name: "Scripted Provider",
            version: "test",
            max_output_tokens: 2048,
        }
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let prompt = request.last_user_text().unwrap_or_default();
        let reply = if prompt.contains("red team simulation results") {
            HISTORY_REPLY
        } else if prompt.contains("Analyze the following attack scenario") {
            if let Some(error) = &self.analysis_error {
                return Err(error.clone());
            }
            ANALYSIS_REPLY
        } else {
            SCENARIO_REPLY
        };

        Ok(CompletionResponse {
            id: "scripted-response".to_string(),
            model: "test-model".to_string(),
            content: vec![ContentBlock::text(reply)],
            stop_reason: StopReason::EndTurn,
            usage: Usage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            },
        })
    }
}

/// Dataset source that is always down, so targets come from synthetic data
#[derive(Default)]
pub struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self, _dataset: &str) -> Result<Vec<PathBuf>, FetchError> {
        Err(FetchError::Status {
            status: 503,
            message: "dataset host unavailable".to_string(),
        })
    }
}

/// Config rooted in `dir` with fixed seeds
pub fn test_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.osint.data_dir = dir.join("osint");
    config.osint.seed = Some(7);
    config.simulation.seed = Some(42);
    config.simulation.results_dir = dir.join("scenarios");
    config.simulation.visualizations_dir = dir.join("visualizations");
    config.llm.default_model = "test-model".to_string();
    config
}

pub fn test_state(config: &Config, provider: Arc<ScriptedProvider>) -> AppState {
    let targets = Arc::new(TargetProvider::new(
        config.osint.clone(),
        Arc::new(FailingSource),
    ));
    AppState::new(config, provider, targets)
}

pub fn test_server(state: AppState, config: &Config) -> TestServer {
    TestServer::new(create_router(state, &config.server)).unwrap()
}

pub fn cargo_target() -> serde_json::Value {
    serde_json::json!({
        "kind": "maritime",
        "mmsi": "123",
        "vessel_type": "Cargo",
        "systems": ["navigation", "communication"]
    })
}
