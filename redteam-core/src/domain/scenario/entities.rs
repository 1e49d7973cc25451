//! Scenario entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::value_objects::{AttackPlan, Complexity, ScenarioStatus, StepResult};
use crate::domain::analysis::VulnerabilityAnalysis;
use crate::domain::target::Target;

/// Rejected lifecycle change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Scenario {id} cannot move from {from} to {to}")]
pub struct InvalidTransition {
    pub id: Uuid,
    pub from: ScenarioStatus,
    pub to: ScenarioStatus,
}

/// A generated attack plan bound to a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scenario {
    pub id: Uuid,
    pub target: Target,
    pub complexity: Complexity,
    #[serde(flatten)]
    pub plan: AttackPlan,
    pub status: ScenarioStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub simulation_results: Vec<StepResult>,
    #[serde(default)]
    pub overall_success: bool,
    #[serde(default)]
    pub vulnerability_analysis: Option<VulnerabilityAnalysis>,
}

impl Scenario {
    pub fn new(target: Target, complexity: Complexity, plan: AttackPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            complexity,
            plan,
            status: ScenarioStatus::Generated,
            created_at: Utc::now(),
            simulation_results: Vec::new(),
            overall_success: false,
            vulnerability_analysis: None,
        }
    }

    /// Replace the simulation outcome and mark the scenario simulated.
    ///
    /// Any earlier analysis is discarded since it described other results.
    pub fn record_simulation(&mut self, results: Vec<StepResult>) -> Result<(), InvalidTransition> {
        self.check_transition(ScenarioStatus::Simulated)?;
        self.overall_success = results.iter().any(|r| r.success);
        self.simulation_results = results;
        self.vulnerability_analysis = None;
        self.status = ScenarioStatus::Simulated;
        Ok(())
    }

    /// Attach an analysis and mark the scenario analyzed
    pub fn record_analysis(&mut self, analysis: VulnerabilityAnalysis) -> Result<(), InvalidTransition> {
        self.check_transition(ScenarioStatus::Analyzed)?;
        self.vulnerability_analysis = Some(analysis);
        self.status = ScenarioStatus::Analyzed;
        Ok(())
    }

    /// Number of steps that were executed before the run ended
    pub fn steps_executed(&self) -> usize {
        self.simulation_results.len()
    }

    fn check_transition(&self, to: ScenarioStatus) -> Result<(), InvalidTransition> {
        if self.status.can_transition_to(&to) {
            Ok(())
        } else {
            Err(InvalidTransition {
                id: self.id,
                from: self.status,
                to,
            })
        }
    }
}
