//! In-memory scenario history with JSON export

use chrono::Utc;
use redteam_core::domain::Scenario;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::SimulationError;

/// Append-only record of every completed scenario.
///
/// Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct ScenarioHistory {
    scenarios: Arc<RwLock<Vec<Scenario>>>,
}

impl ScenarioHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, scenario: Scenario) {
        let mut scenarios = self.scenarios.write().await;
        scenarios.push(scenario);
        info!(recorded = scenarios.len(), "Scenario recorded in history");
    }

    /// Snapshot in recording order
    pub async fn all(&self) -> Vec<Scenario> {
        self.scenarios.read().await.clone()
    }

    /// Snapshot, or [`SimulationError::EmptyHistory`] when nothing was recorded
    pub async fn non_empty(&self) -> Result<Vec<Scenario>, SimulationError> {
        let scenarios = self.all().await;
        if scenarios.is_empty() {
            Err(SimulationError::EmptyHistory)
        } else {
            Ok(scenarios)
        }
    }

    pub async fn len(&self) -> usize {
        self.scenarios.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scenarios.read().await.is_empty()
    }

    /// Write the history to `dir/simulation_results_<YYYYmmdd_HHMMSS>.json`
    pub async fn export(&self, dir: &Path) -> Result<PathBuf, SimulationError> {
        let scenarios = self.non_empty().await?;

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SimulationError::io(dir, e))?;

        let path = dir.join(format!(
            "simulation_results_{}.json",
            Utc::now().format("%Y%m%d_%H%M%S")
        ));
        let json = serde_json::to_string_pretty(&scenarios)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| SimulationError::io(&path, e))?;

        info!(path = %path.display(), scenarios = scenarios.len(), "Simulation history exported");
        Ok(path)
    }
}
