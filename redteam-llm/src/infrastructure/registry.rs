//! Provider factory
//!
//! Builds the configured provider from [`LlmConfig`].

use std::str::FromStr;
use std::sync::Arc;

use redteam_core::config::LlmConfig;
use tracing::{info, warn};

use crate::domain::{LlmError, LlmProvider};
use crate::infrastructure::providers::{AnthropicProvider, OpenAIProvider};

/// Provider type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    Anthropic,
    OpenAI,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAI => "openai",
        }
    }
}

impl FromStr for ProviderType {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "openai" | "gpt" => Ok(Self::OpenAI),
            other => Err(LlmError::ProviderNotFound(format!(
                "Unknown provider: {}. Valid options: anthropic, openai",
                other
            ))),
        }
    }
}

/// Create the provider selected by `config.provider`.
///
/// A missing API key is not fatal here: the provider is still built and every
/// call fails with [`LlmError::Authentication`], so the rest of the service
/// (target browsing, metrics) stays usable.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider_type: ProviderType = config.provider.parse()?;

    let provider: Arc<dyn LlmProvider> = match provider_type {
        ProviderType::Anthropic => {
            let api_key = config.anthropic.api_key.clone().unwrap_or_default();
            if api_key.is_empty() {
                warn!("Anthropic API key not configured; scenario generation will fail until ANTHROPIC_API_KEY is set");
            }

            Arc::new(
                AnthropicProvider::with_timeout(api_key, &config.default_model, config.timeout_seconds)
                    .with_base_url(&config.anthropic.base_url)
                    .with_api_version(&config.anthropic.api_version),
            )
        }
        ProviderType::OpenAI => {
            let api_key = config.openai.api_key.clone().unwrap_or_default();
            if api_key.is_empty() {
                warn!("OpenAI API key not configured; scenario generation will fail until OPENAI_API_KEY is set");
            }

            let mut provider =
                OpenAIProvider::with_timeout(api_key, &config.default_model, config.timeout_seconds)
                    .with_base_url(&config.openai.base_url);
            if let Some(ref org) = config.openai.organization_id {
                provider = provider.with_organization(org);
            }
            Arc::new(provider)
        }
    };

    info!(
        provider = provider_type.as_str(),
        model = %provider.default_model(),
        "LLM provider initialized"
    );
    Ok(provider)
}
