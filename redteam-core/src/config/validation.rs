//! Configuration validation module

use crate::config::{LlmConfig, LoggingConfig, OsintConfig, ServerConfig, SimulationConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },

    #[error("LLM configuration error: {message}")]
    Llm { message: String },

    #[error("OSINT configuration error: {message}")]
    Osint { message: String },

    #[error("Simulation configuration error: {message}")]
    Simulation { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    pub fn osint(message: impl Into<String>) -> Self {
        Self::Osint {
            message: message.into(),
        }
    }

    pub fn simulation(message: impl Into<String>) -> Self {
        Self::Simulation {
            message: message.into(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only 0 is out of range
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Log format must be 'json' or 'pretty', got: {}",
                other
            ))),
        }
    }
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.provider.as_str() {
            "anthropic" | "claude" | "openai" => {}
            other => {
                return Err(ValidationError::llm(format!(
                    "Unknown provider: {}",
                    other
                )));
            }
        }

        if !is_http_url(&self.anthropic.base_url) {
            return Err(ValidationError::llm(format!(
                "Anthropic base_url must start with http:// or https://, got: {}",
                self.anthropic.base_url
            )));
        }

        if !is_http_url(&self.openai.base_url) {
            return Err(ValidationError::llm(format!(
                "OpenAI base_url must start with http:// or https://, got: {}",
                self.openai.base_url
            )));
        }

        if self.max_tokens == 0 {
            return Err(ValidationError::llm("max_tokens must be greater than 0"));
        }

        for (name, value) in [
            ("scenario_temperature", self.scenario_temperature),
            ("analysis_temperature", self.analysis_temperature),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::llm(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::llm("LLM timeout must be > 0"));
        }

        Ok(())
    }
}

impl Validate for OsintConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.dataset_base_url) {
            return Err(ValidationError::osint(format!(
                "dataset_base_url must start with http:// or https://, got: {}",
                self.dataset_base_url
            )));
        }

        if self.ais_dataset.is_empty() {
            return Err(ValidationError::osint("ais_dataset cannot be empty"));
        }

        if self.target_pool_size == 0 {
            return Err(ValidationError::osint(
                "target_pool_size must be greater than 0",
            ));
        }

        if self.max_listing_limit == 0 {
            return Err(ValidationError::osint(
                "max_listing_limit must be greater than 0",
            ));
        }

        if self.infrastructure_cache_ttl_hours == 0 {
            return Err(ValidationError::osint(
                "Infrastructure cache TTL must be greater than 0 hours",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::osint("Download timeout must be > 0"));
        }

        Ok(())
    }
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("step_success_threshold", self.step_success_threshold),
            (
                "stop_after_failure_threshold",
                self.stop_after_failure_threshold,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::simulation(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }

        if self
            .default_complexity
            .parse::<crate::domain::Complexity>()
            .is_err()
        {
            return Err(ValidationError::simulation(format!(
                "default_complexity must be one of low, medium, high, critical; got: {}",
                self.default_complexity
            )));
        }

        Ok(())
    }
}
