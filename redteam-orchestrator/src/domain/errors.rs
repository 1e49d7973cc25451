//! Orchestration errors

use redteam_core::domain::InvalidTransition;
use redteam_llm::LlmError;
use std::path::PathBuf;

/// Failure of a simulation run or of a history operation
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Scenario generation failed: {0}")]
    Generation(#[source] LlmError),

    #[error("Vulnerability analysis failed: {0}")]
    Analysis(#[source] LlmError),

    #[error("History analysis failed: {0}")]
    HistoryAnalysis(#[source] LlmError),

    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    #[error("No simulation results available")]
    EmptyHistory,

    #[error("Failed to serialize simulation history: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SimulationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the caller asked for something that needs recorded history
    pub fn is_empty_history(&self) -> bool {
        matches!(self, Self::EmptyHistory)
    }
}
