//! Scenario builders shared by the domain unit tests

use redteam_core::domain::{
    AttackPlan, AttackerProfile, Complexity, Scenario, StepResult, Target, VulnerabilityAnalysis,
};
use serde_json::json;

/// Facility when `id` starts with "FAC", vessel otherwise
pub fn target(id: &str) -> Target {
    let value = if id.starts_with("FAC") {
        json!({ "id": id, "name": "Test Plant", "facility_type": "Power Plant" })
    } else {
        json!({ "mmsi": id, "vessel_name": format!("VESSEL_{}", id), "vessel_type": "Cargo" })
    };
    Target::from_value(value).unwrap()
}

/// A simulated scenario with one step per outcome
pub fn simulated(id: &str, attack_vector: &str, outcomes: &[bool]) -> Scenario {
    let steps: Vec<String> = (1..=outcomes.len().max(1))
        .map(|i| format!("Step {}", i))
        .collect();
    let mut scenario = Scenario::new(
        target(id),
        Complexity::Medium,
        AttackPlan {
            attack_vector: attack_vector.to_string(),
            steps: steps.clone(),
            impact: "High".to_string(),
            indicators: vec![],
            attacker_profile: AttackerProfile {
                resources: "Medium".to_string(),
                skills: "Advanced".to_string(),
            },
        },
    );
    let results = outcomes
        .iter()
        .enumerate()
        .map(|(i, success)| StepResult::new(i + 1, steps[i].as_str(), *success))
        .collect();
    scenario.record_simulation(results).unwrap();
    scenario
}

pub fn analyzed(id: &str, attack_vector: &str, outcomes: &[bool], severity: &str) -> Scenario {
    let mut scenario = simulated(id, attack_vector, outcomes);
    scenario
        .record_analysis(VulnerabilityAnalysis {
            severity: severity.to_string(),
            explanation: "Test analysis".to_string(),
            mitigations: vec![],
            long_term_fixes: vec![],
            detection_methods: vec![],
        })
        .unwrap();
    scenario
}
