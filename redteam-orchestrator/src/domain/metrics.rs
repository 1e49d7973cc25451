//! Aggregate statistics over recorded scenarios

use redteam_core::domain::{Scenario, TargetKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Severity bucket of an analysis label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    /// Unrecognized label or no analysis yet
    Unknown,
}

impl Severity {
    /// Buckets that always appear in a distribution, in chart order
    pub const RANKED: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Bucket a free-text label by its first word, ignoring case
    pub fn from_label(label: &str) -> Self {
        let first = label
            .split(|c: char| !c.is_ascii_alphabetic())
            .find(|word| !word.is_empty())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match first.as_str() {
            "low" => Self::Low,
            "medium" | "moderate" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }

    fn of(scenario: &Scenario) -> Self {
        scenario
            .vulnerability_analysis
            .as_ref()
            .map_or(Self::Unknown, |analysis| Self::from_label(&analysis.severity))
    }
}

/// One bar of the severity chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimulationMetrics {
    pub total_simulations: usize,
    /// Scenarios where at least one step succeeded
    pub successful_attacks: usize,
    /// `successful_attacks / total_simulations`, 0 when empty
    pub success_rate: f64,
    pub average_steps_executed: f64,
    /// Scenario count per attack vector
    pub attack_vectors: BTreeMap<String, usize>,
    /// Low to Critical, then Unknown when any scenario fell outside them
    pub severity_distribution: Vec<SeverityCount>,
    pub maritime_simulations: usize,
    pub infrastructure_simulations: usize,
}

impl SimulationMetrics {
    pub fn from_history(scenarios: &[Scenario]) -> Self {
        let total = scenarios.len();
        let successful = scenarios.iter().filter(|s| s.overall_success).count();
        let steps: usize = scenarios.iter().map(Scenario::steps_executed).sum();

        let mut attack_vectors = BTreeMap::new();
        let mut severities: BTreeMap<Severity, usize> = BTreeMap::new();
        let mut maritime = 0;

        for scenario in scenarios {
            *attack_vectors
                .entry(scenario.plan.attack_vector.clone())
                .or_insert(0) += 1;
            *severities.entry(Severity::of(scenario)).or_insert(0) += 1;
            if scenario.target.kind() == TargetKind::Maritime {
                maritime += 1;
            }
        }

        let mut severity_distribution: Vec<SeverityCount> = Severity::RANKED
            .iter()
            .map(|severity| SeverityCount {
                severity: *severity,
                count: severities.get(severity).copied().unwrap_or(0),
            })
            .collect();
        if let Some(count) = severities.get(&Severity::Unknown) {
            severity_distribution.push(SeverityCount {
                severity: Severity::Unknown,
                count: *count,
            });
        }

        Self {
            total_simulations: total,
            successful_attacks: successful,
            success_rate: ratio(successful, total),
            average_steps_executed: ratio(steps, total),
            attack_vectors,
            severity_distribution,
            maritime_simulations: maritime,
            infrastructure_simulations: total - maritime,
        }
    }

    /// Share of scenarios the defenders fully stopped
    pub fn defense_rate(&self) -> f64 {
        if self.total_simulations == 0 {
            0.0
        } else {
            1.0 - self.success_rate
        }
    }

    pub fn severity_count(&self, severity: Severity) -> usize {
        self.severity_distribution
            .iter()
            .find(|entry| entry.severity == severity)
            .map_or(0, |entry| entry.count)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
