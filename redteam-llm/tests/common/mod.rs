// Common test utilities and mock implementations

use async_trait::async_trait;
use redteam_core::config::LlmConfig;
use redteam_core::domain::{
    AttackPlan, AttackerProfile, AuthenticationMethod, Complexity, ConfigurationClass,
    EncryptionLevel, Scenario, SecurityControls, StepResult, SubsystemDetail, SystemDetails,
    Target,
};
use redteam_llm::domain::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider, ProviderInfo,
    StopReason, Usage,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock LLM provider for testing
pub struct MockLlmProvider {
    /// Response to return from complete()
    pub response: Option<CompletionResponse>,
    /// Error to return (if any)
    pub error: Option<LlmError>,
    /// Captured requests for verification
    pub captured_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmProvider {
    pub fn new() -> Self {
        Self {
            response: None,
            error: None,
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: CompletionResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: LlmError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_text_response(content: &str) -> Self {
        Self::new().with_response(create_completion_response(content))
    }

    pub async fn last_request(&self) -> CompletionRequest {
        self.captured_requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request captured")
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: "mock",
            name: "Mock Provider",
            version: "test",
            max_output_tokens: 2048,
        }
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.captured_requests.lock().await.push(request);

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        self.response
            .clone()
            .ok_or_else(|| LlmError::Other("No response configured".to_string()))
    }
}

/// Create a standard LLM response with given content
pub fn create_completion_response(content: &str) -> CompletionResponse {
    CompletionResponse {
        id: "test-response-id".to_string(),
        model: "test-model".to_string(),
        content: vec![ContentBlock::text(content)],
        stop_reason: StopReason::EndTurn,
        usage: Usage {
            prompt_tokens: 100,
            completion_tokens: 50,
            total_tokens: 150,
        },
    }
}

/// Create default test LlmConfig
pub fn create_test_config() -> LlmConfig {
    LlmConfig {
        default_model: "test-model".to_string(),
        max_tokens: 2000,
        scenario_temperature: 0.7,
        analysis_temperature: 0.2,
        timeout_seconds: 30,
        ..LlmConfig::default()
    }
}

pub fn cargo_vessel() -> Target {
    Target::from_value(serde_json::json!({
        "kind": "maritime",
        "mmsi": "366999999",
        "vessel_name": "EVER TEST",
        "vessel_type": "Cargo",
        "systems": ["navigation", "communication", "cargo_management"],
        "security_level": "low"
    }))
    .unwrap()
}

pub fn simulated_scenario() -> Scenario {
    let mut scenario = Scenario::new(
        cargo_vessel(),
        Complexity::High,
        AttackPlan {
            attack_vector: "ECDIS malware via chart update USB".to_string(),
            steps: vec![
                "Compromise chart supplier".to_string(),
                "Deliver infected update".to_string(),
                "Manipulate route".to_string(),
            ],
            impact: "High".to_string(),
            indicators: vec!["Unsigned chart files".to_string()],
            attacker_profile: AttackerProfile {
                resources: "High".to_string(),
                skills: "Expert".to_string(),
            },
        },
    );
    scenario
        .record_simulation(vec![
            StepResult::new(1, "Compromise chart supplier", true),
            StepResult::new(2, "Deliver infected update", false),
        ])
        .unwrap();
    scenario
}

pub fn system_details() -> SystemDetails {
    let mut detailed_systems = BTreeMap::new();
    detailed_systems.insert(
        "navigation".to_string(),
        SubsystemDetail {
            version: "4.2".to_string(),
            patch_level: "P7".to_string(),
            configuration: ConfigurationClass::Default,
            known_vulnerabilities: 3,
        },
    );
    SystemDetails {
        detailed_systems,
        security_controls: SecurityControls {
            firewall: true,
            ids: false,
            encryption: EncryptionLevel::Partial,
            authentication: AuthenticationMethod::Basic,
        },
    }
}
