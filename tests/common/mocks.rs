//! Model provider double answering each prompt type with a fixed reply

use async_trait::async_trait;
use redteam_simulator::redteam_llm::domain::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider, ProviderInfo,
    StopReason, Usage,
};

const SCENARIO_REPLY: &str = r#"{"attack_vector": "Ransomware via vendor VPN",
"steps": ["Phish vendor", "Reuse VPN credentials", "Deploy ransomware"],
"impact": "Critical", "indicators": ["New VPN sessions at night"],
"attacker_profile": {"resources": "High", "skills": "Advanced"}}"#;

const ANALYSIS_REPLY: &str = r#"{"severity": "High", "explanation": "Shared vendor credentials.",
"mitigations": ["Rotate vendor credentials"], "long_term_fixes": ["Per-vendor MFA"],
"detection_methods": ["VPN anomaly alerts"]}"#;

pub struct MockProvider;

#[async_trait]
impl LlmProvider for MockProvider {
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
        let prompt = request.last_user_text().unwrap_or_default();
        let reply = if prompt.contains("Analyze the following attack scenario") {
            ANALYSIS_REPLY
        } else {
            SCENARIO_REPLY
        };

        Ok(CompletionResponse {
            id: "mock-response".to_string(),
            model: "test-model".to_string(),
            content: vec![ContentBlock::text(reply)],
            stop_reason: StopReason::EndTurn,
            usage: Usage {
                prompt_tokens: 10,
                completion_tokens: 10,
                total_tokens: 20,
            },
        })
    }
}
