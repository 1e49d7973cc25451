//! LLM Provider trait and related types

use async_trait::async_trait;

use crate::domain::error::LlmError;
use crate::domain::messages::{CompletionRequest, CompletionResponse};

/// Metadata about a provider
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    /// Provider identifier (e.g., "anthropic", "openai")
    pub id: &'static str,
    pub name: &'static str,
    /// API version the provider speaks
    pub version: &'static str,
    pub max_output_tokens: u32,
}

/// Core trait for LLM providers
///
/// The trait is object-safe and is used through `Arc<dyn LlmProvider>`.
///
/// # Example
///
/// ```rust,ignore
/// use redteam_llm::{CompletionRequest, LlmError, LlmProvider};
///
/// async fn ask(provider: &dyn LlmProvider) -> Result<String, LlmError> {
///     let request = CompletionRequest::new()
///         .with_system("You are a maritime security analyst.")
///         .with_user("List common bridge systems.");
///
///     Ok(provider.complete(request).await?.text())
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn info(&self) -> ProviderInfo;

    /// Generate a completion
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Check if the provider is healthy and can accept requests
    async fn health_check(&self) -> Result<(), LlmError> {
        let request = CompletionRequest::new()
            .with_user("ping")
            .with_max_tokens(1);

        self.complete(request).await.map(|_| ())
    }

    /// Get the default model for this provider
    fn default_model(&self) -> &str;
}
