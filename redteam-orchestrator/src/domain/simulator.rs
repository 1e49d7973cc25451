//! Probabilistic step-by-step attack execution

use rand::Rng;
use redteam_core::config::SimulationConfig;
use redteam_core::domain::{InvalidTransition, Scenario, StepResult};
use tracing::debug;

/// Walks a scenario's steps, rolling each one against fixed thresholds.
///
/// A step succeeds when its draw is strictly above `step_success_threshold`.
/// After a failed step a second draw strictly above
/// `stop_after_failure_threshold` ends the run. The first step always runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackSimulator {
    step_success_threshold: f64,
    stop_after_failure_threshold: f64,
}

impl Default for AttackSimulator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl AttackSimulator {
    pub fn new(step_success_threshold: f64, stop_after_failure_threshold: f64) -> Self {
        Self {
            step_success_threshold,
            stop_after_failure_threshold,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.step_success_threshold,
            config.stop_after_failure_threshold,
        )
    }

    /// Roll every step of `steps` until the run ends
    pub fn run<R: Rng + ?Sized>(&self, steps: &[String], rng: &mut R) -> Vec<StepResult> {
        let mut results = Vec::with_capacity(steps.len());

        for (index, description) in steps.iter().enumerate() {
            let success = rng.random::<f64>() > self.step_success_threshold;
            results.push(StepResult::new(index + 1, description.as_str(), success));

            // Complexity plays no part in either draw
            if !success && rng.random::<f64>() > self.stop_after_failure_threshold {
                break;
            }
        }

        results
    }

    /// Simulate `scenario` in place and mark it simulated
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        scenario: &mut Scenario,
        rng: &mut R,
    ) -> Result<(), InvalidTransition> {
        let results = self.run(&scenario.plan.steps, rng);
        debug!(
            scenario_id = %scenario.id,
            planned = scenario.plan.steps.len(),
            executed = results.len(),
            succeeded = results.iter().filter(|r| r.success).count(),
            "Scenario simulated"
        );
        scenario.record_simulation(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use redteam_core::domain::{
        AttackPlan, AttackerProfile, Complexity, ScenarioStatus, Target,
    };

    fn steps(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Step {}", i)).collect()
    }

    fn scenario(n: usize) -> Scenario {
        let target = Target::from_value(serde_json::json!({ "mmsi": "123" })).unwrap();
        Scenario::new(
            target,
            Complexity::Medium,
            AttackPlan {
                attack_vector: "AIS spoofing".to_string(),
                steps: steps(n),
                impact: "High".to_string(),
                indicators: vec![],
                attacker_profile: AttackerProfile {
                    resources: "Medium".to_string(),
                    skills: "Advanced".to_string(),
                },
            },
        )
    }

    #[test]
    fn test_all_steps_succeed_when_threshold_is_below_zero() {
        let simulator = AttackSimulator::new(-1.0, 0.5);
        let results = simulator.run(&steps(4), &mut StdRng::seed_from_u64(1));

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(results[3].step, 4);
        assert_eq!(results[3].details, "Successful execution of step 4");
    }

    #[test]
    fn test_first_failure_stops_when_stop_threshold_is_below_zero() {
        let simulator = AttackSimulator::new(1.0, -1.0);
        let results = simulator.run(&steps(5), &mut StdRng::seed_from_u64(1));

        assert_eq!(results.len(), 1);
        assert!(!results[0].success);
        assert_eq!(results[0].details, "Failed execution of step 1");
    }

    #[test]
    fn test_failures_never_stop_when_stop_threshold_is_one() {
        let simulator = AttackSimulator::new(1.0, 1.0);
        let results = simulator.run(&steps(5), &mut StdRng::seed_from_u64(9));

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| !r.success));
    }

    #[test]
    fn test_no_steps_gives_no_results() {
        let results = AttackSimulator::default().run(&[], &mut StdRng::seed_from_u64(3));
        assert!(results.is_empty());
    }

    #[test]
    fn test_simulate_records_results() {
        let mut scenario = scenario(3);
        AttackSimulator::new(-1.0, 0.5)
            .simulate(&mut scenario, &mut StdRng::seed_from_u64(5))
            .unwrap();

        assert_eq!(scenario.status, ScenarioStatus::Simulated);
        assert_eq!(scenario.steps_executed(), 3);
        assert!(scenario.overall_success);
        assert_eq!(scenario.simulation_results[0].description, "Step 1");
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let simulator = AttackSimulator::default();
        let first = simulator.run(&steps(8), &mut StdRng::seed_from_u64(42));
        let second = simulator.run(&steps(8), &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
