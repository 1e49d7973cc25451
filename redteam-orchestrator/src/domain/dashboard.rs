//! Chart data for the dashboard view

use chrono::{DateTime, Utc};
use redteam_core::domain::Scenario;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::graph::AttackGraph;
use super::metrics::SimulationMetrics;

/// Attack success against defense success, the two bars of the outcome chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OutcomeRates {
    pub attack_success: f64,
    pub defense_success: f64,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardData {
    pub generated_at: DateTime<Utc>,
    pub outcome_rates: OutcomeRates,
    pub metrics: SimulationMetrics,
    pub attack_graph: AttackGraph,
}

impl DashboardData {
    pub fn from_history(scenarios: &[Scenario]) -> Self {
        let metrics = SimulationMetrics::from_history(scenarios);
        Self {
            generated_at: Utc::now(),
            outcome_rates: OutcomeRates {
                attack_success: metrics.success_rate,
                defense_success: metrics.defense_rate(),
            },
            attack_graph: AttackGraph::from_history(scenarios),
            metrics,
        }
    }
}
