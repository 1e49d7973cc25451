//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub osint: OsintConfig,
    pub simulation: SimulationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether to expose interactive API docs (Swagger UI).
    pub enable_docs: bool,
    /// Global request timeout in seconds applied at the HTTP layer.
    /// Scenario generation makes two model calls, so keep this above `llm.timeout_seconds`.
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins. Use ["*"] to allow any (development only). Empty vector -> no external origins.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_docs: true,
            request_timeout_seconds: 300,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `json` or `pretty`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Active provider: "anthropic" or "openai"
    pub provider: String,

    #[serde(default)]
    pub anthropic: AnthropicConfig,

    #[serde(default)]
    pub openai: OpenAIConfig,

    /// Model used for every request unless the provider overrides it
    pub default_model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature for scenario generation
    pub scenario_temperature: f64,
    /// Sampling temperature for vulnerability and history analysis
    pub analysis_temperature: f64,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            anthropic: AnthropicConfig::default(),
            openai: OpenAIConfig::default(),
            default_model: "claude-3-opus-20240229".to_string(),
            max_tokens: 2000,
            scenario_temperature: 0.7,
            analysis_temperature: 0.2,
            timeout_seconds: 120,
        }
    }
}

/// Anthropic Messages API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    /// API Key (can also use ANTHROPIC_API_KEY env var)
    pub api_key: Option<String>,
    pub base_url: String,
    /// Value sent in the `anthropic-version` header
    pub api_version: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com/v1".to_string(),
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// OpenAI-compatible provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    /// API Key (can also use OPENAI_API_KEY env var)
    pub api_key: Option<String>,
    pub base_url: String,
    pub organization_id: Option<String>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            organization_id: None,
        }
    }
}

/// Target collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OsintConfig {
    /// Directory holding cache files and downloaded datasets
    pub data_dir: PathBuf,
    /// Hosted dataset holding AIS position reports
    pub ais_dataset: String,
    /// Base URL the dataset name is appended to when downloading
    pub dataset_base_url: String,
    /// Serve datasets from this directory instead of downloading them
    pub local_dataset_dir: Option<PathBuf>,
    /// Kaggle credentials (can also use KAGGLE_USERNAME / KAGGLE_KEY env vars)
    pub kaggle_username: Option<String>,
    pub kaggle_key: Option<String>,
    /// Country code used for infrastructure collection
    pub default_country: String,
    /// Freshness window of the infrastructure cache
    pub infrastructure_cache_ttl_hours: u64,
    /// Number of records `get_target` draws from
    pub target_pool_size: usize,
    /// Largest `limit` accepted by the target listing endpoint
    pub max_listing_limit: usize,
    /// Download timeout in seconds
    pub timeout_seconds: u64,
    /// Fixed seed for synthetic data (random when unset)
    pub seed: Option<u64>,
}

impl Default for OsintConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/osint"),
            ais_dataset: "eminserkanerdonmez/ais-dataset".to_string(),
            dataset_base_url: "https://www.kaggle.com/api/v1/datasets/download".to_string(),
            local_dataset_dir: None,
            kaggle_username: None,
            kaggle_key: None,
            default_country: "US".to_string(),
            infrastructure_cache_ttl_hours: 24,
            target_pool_size: 20,
            max_listing_limit: 100,
            timeout_seconds: 60,
            seed: None,
        }
    }
}

/// Attack simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// A step succeeds when its draw is strictly above this value
    pub step_success_threshold: f64,
    /// After a failed step, the run stops when its draw is strictly above this value
    pub stop_after_failure_threshold: f64,
    /// Fixed seed for the simulator (random when unset)
    pub seed: Option<u64>,
    /// Default complexity for requests that do not name one
    pub default_complexity: String,
    /// Where exported histories are written
    pub results_dir: PathBuf,
    /// Where chart data is written by the demo
    pub visualizations_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_success_threshold: 0.3,
            stop_after_failure_threshold: 0.5,
            seed: None,
            default_complexity: "medium".to_string(),
            results_dir: PathBuf::from("data/scenarios"),
            visualizations_dir: PathBuf::from("data/visualizations"),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.llm.validate()?;
        self.osint.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("REDTEAM").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.apply_env_fallbacks();
        config.validate()?;

        Ok(config)
    }

    /// Fill credentials from their conventional environment variables when the
    /// config files leave them unset.
    fn apply_env_fallbacks(&mut self) {
        let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if self.llm.anthropic.api_key.is_none() {
            self.llm.anthropic.api_key = from_env("ANTHROPIC_API_KEY");
        }
        if self.llm.openai.api_key.is_none() {
            self.llm.openai.api_key = from_env("OPENAI_API_KEY");
        }
        if self.osint.kaggle_username.is_none() {
            self.osint.kaggle_username = from_env("KAGGLE_USERNAME");
        }
        if self.osint.kaggle_key.is_none() {
            self.osint.kaggle_key = from_env("KAGGLE_KEY");
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
