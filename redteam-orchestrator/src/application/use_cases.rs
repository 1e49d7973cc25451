//! Orchestrator use cases

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, instrument};

use redteam_core::config::{LlmConfig, SimulationConfig};
use redteam_core::domain::{Complexity, HistoryReport, Scenario, Target};
use redteam_llm::{
    AnalyzeHistoryUseCase, AnalyzeVulnerabilityUseCase, GenerateScenarioUseCase, LlmProvider,
};

use crate::domain::{
    AttackSimulator, DashboardData, SimulationError, SimulationMetrics, generate_system_details,
};
use crate::infrastructure::ScenarioHistory;

/// File the dashboard chart data is written to
pub const DASHBOARD_FILE: &str = "dashboard.json";

/// Generate, simulate, analyze and record one scenario
pub struct RunSimulationUseCase {
    generate: GenerateScenarioUseCase,
    analyze: AnalyzeVulnerabilityUseCase,
    simulator: AttackSimulator,
    history: ScenarioHistory,
    rng: Mutex<StdRng>,
}

impl RunSimulationUseCase {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        llm: LlmConfig,
        simulation: &SimulationConfig,
        history: ScenarioHistory,
    ) -> Self {
        let rng = match simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            generate: GenerateScenarioUseCase::new(provider.clone(), llm.clone()),
            analyze: AnalyzeVulnerabilityUseCase::new(provider, llm),
            simulator: AttackSimulator::from_config(simulation),
            history,
            rng: Mutex::new(rng),
        }
    }

    #[instrument(skip(self, target), fields(target = %target.identifier(), kind = %target.kind()))]
    pub async fn execute(
        &self,
        target: &Target,
        complexity: Complexity,
    ) -> Result<Scenario, SimulationError> {
        let mut scenario = self
            .generate
            .execute(target, complexity)
            .await
            .map_err(SimulationError::Generation)?;

        // The guard must be gone before the next await
        let details = {
            let mut rng = self.rng();
            self.simulator.simulate(&mut scenario, &mut *rng)?;
            generate_system_details(target.systems(), &mut *rng)
        };

        let analysis = self
            .analyze
            .execute(&scenario, &details)
            .await
            .map_err(SimulationError::Analysis)?;
        scenario.record_analysis(analysis)?;

        info!(
            scenario_id = %scenario.id,
            steps_executed = scenario.steps_executed(),
            overall_success = scenario.overall_success,
            "Simulation complete"
        );

        self.history.record(scenario.clone()).await;
        Ok(scenario)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Model-written review of the whole recorded history
pub struct ReviewHistoryUseCase {
    analyze: AnalyzeHistoryUseCase,
    history: ScenarioHistory,
}

impl ReviewHistoryUseCase {
    pub fn new(analyze: AnalyzeHistoryUseCase, history: ScenarioHistory) -> Self {
        Self { analyze, history }
    }

    pub async fn execute(&self) -> Result<HistoryReport, SimulationError> {
        let scenarios = self.history.non_empty().await?;
        self.analyze
            .execute(&scenarios)
            .await
            .map_err(SimulationError::HistoryAnalysis)
    }
}

/// Metrics and chart data computed from the recorded history
pub struct HistoryStatisticsUseCase {
    history: ScenarioHistory,
}

impl HistoryStatisticsUseCase {
    pub fn new(history: ScenarioHistory) -> Self {
        Self { history }
    }

    pub async fn metrics(&self) -> Result<SimulationMetrics, SimulationError> {
        let scenarios = self.history.non_empty().await?;
        Ok(SimulationMetrics::from_history(&scenarios))
    }

    pub async fn dashboard(&self) -> Result<DashboardData, SimulationError> {
        let scenarios = self.history.non_empty().await?;
        Ok(DashboardData::from_history(&scenarios))
    }

    /// Write the dashboard data to `dir/dashboard.json`
    pub async fn write_dashboard(&self, dir: &Path) -> Result<PathBuf, SimulationError> {
        let dashboard = self.dashboard().await?;

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SimulationError::io(dir, e))?;
        let path = dir.join(DASHBOARD_FILE);
        tokio::fs::write(&path, serde_json::to_string_pretty(&dashboard)?)
            .await
            .map_err(|e| SimulationError::io(&path, e))?;

        info!(path = %path.display(), "Dashboard data written");
        Ok(path)
    }
}
