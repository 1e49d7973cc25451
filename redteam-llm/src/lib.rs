//! Language model access for the red team simulator
//!
//! - [`domain`]: provider-agnostic messages, errors and the [`LlmProvider`] trait
//! - [`infrastructure`]: Anthropic and OpenAI-compatible providers, prompts, parsers
//! - [`application`]: scenario generation, vulnerability analysis, history review

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{
    AnalyzeHistoryUseCase, AnalyzeVulnerabilityUseCase, GenerateScenarioUseCase,
};
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::{
    AnthropicProvider, HeadingSectionParser, OpenAIProvider, ProviderType, ReportParser,
    ResponseParser, create_provider,
};
