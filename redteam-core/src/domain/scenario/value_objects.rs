//! Scenario value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Requested sophistication of a generated scenario.
///
/// Only shapes the prompt; the simulator treats every complexity alike.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!(
                "Invalid complexity '{}': expected low, medium, high or critical",
                other
            )),
        }
    }
}

/// Lifecycle of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Generated,
    Simulated,
    Analyzed,
}

impl ScenarioStatus {
    /// Whether moving to `next` is allowed.
    ///
    /// A scenario may be re-simulated from any state, which discards a previous
    /// analysis. Analysis requires simulation results.
    pub fn can_transition_to(&self, next: &ScenarioStatus) -> bool {
        match next {
            Self::Generated => false,
            Self::Simulated => true,
            Self::Analyzed => matches!(self, Self::Simulated | Self::Analyzed),
        }
    }
}

impl std::fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated => write!(f, "generated"),
            Self::Simulated => write!(f, "simulated"),
            Self::Analyzed => write!(f, "analyzed"),
        }
    }
}

/// Who the scenario assumes is attacking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttackerProfile {
    pub resources: String,
    pub skills: String,
}

/// The model-authored part of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttackPlan {
    pub attack_vector: String,
    /// Ordered, never empty once normalized
    pub steps: Vec<String>,
    /// Impact label, e.g. "Critical"
    pub impact: String,
    /// Indicators of compromise
    pub indicators: Vec<String>,
    pub attacker_profile: AttackerProfile,
}

/// Outcome of one executed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StepResult {
    /// 1-based position in the plan
    pub step: usize,
    pub description: String,
    pub success: bool,
    pub details: String,
}

impl StepResult {
    pub fn new(step: usize, description: impl Into<String>, success: bool) -> Self {
        let details = if success {
            format!("Successful execution of step {}", step)
        } else {
            format!("Failed execution of step {}", step)
        };
        Self {
            step,
            description: description.into(),
            success,
            details,
        }
    }
}
