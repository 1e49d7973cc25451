//! Orchestrator domain: the simulator, synthetic telemetry and history statistics

pub mod dashboard;
pub mod errors;
pub mod graph;
pub mod metrics;
pub mod simulator;
pub mod system_details;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::{DashboardData, OutcomeRates};
pub use errors::SimulationError;
pub use graph::{AttackGraph, GraphEdge, GraphNode, NodeKind};
pub use metrics::{Severity, SeverityCount, SimulationMetrics};
pub use simulator::AttackSimulator;
pub use system_details::generate_system_details;
