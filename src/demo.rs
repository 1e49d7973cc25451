//! Command-line demonstration run

use anyhow::Context;
use redteam_core::Config;
use redteam_core::domain::{Complexity, Scenario, Target};
use redteam_orchestrator::{AppState, SimulationMetrics};
use std::path::PathBuf;

/// How much the demo collects before simulating
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    pub vessels: usize,
    pub facilities: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            vessels: 5,
            facilities: 5,
        }
    }
}

/// What a demo run produced
#[derive(Debug, Default)]
pub struct DemoReport {
    pub vessels_collected: usize,
    pub facilities_collected: usize,
    pub scenarios: Vec<Scenario>,
    /// One message per simulation that did not complete
    pub failures: Vec<String>,
    pub metrics: Option<SimulationMetrics>,
    pub dashboard_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

/// Collect targets, simulate the first vessel at medium and the first facility
/// at high, then write chart data and export the history.
///
/// A failed simulation is recorded in the report and the run carries on.
pub async fn run_demo(
    state: &AppState,
    config: &Config,
    options: DemoOptions,
) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();
    let country = config.osint.default_country.clone();

    tracing::info!(limit = options.vessels, "Collecting maritime targets");
    let vessels = state.target_provider.collect_vessels(options.vessels).await;
    tracing::info!(limit = options.facilities, country = %country, "Collecting infrastructure targets");
    let facilities = state
        .target_provider
        .collect_facilities(&country, options.facilities)
        .await;
    report.vessels_collected = vessels.len();
    report.facilities_collected = facilities.len();

    let mut runs: Vec<(Target, Complexity)> = Vec::new();
    if let Some(vessel) = vessels.into_iter().next() {
        runs.push((vessel.into(), Complexity::Medium));
    }
    if let Some(facility) = facilities.into_iter().next() {
        runs.push((facility.into(), Complexity::High));
    }

    for (target, complexity) in runs {
        match state.run_simulation.execute(&target, complexity).await {
            Ok(scenario) => report.scenarios.push(scenario),
            Err(e) => {
                tracing::warn!(target = %target.identifier(), error = %e, "Demo simulation failed");
                report
                    .failures
                    .push(format!("{} ({}): {}", target.display_name(), target.kind(), e));
            }
        }
    }

    if report.scenarios.is_empty() {
        tracing::warn!("No simulation completed; skipping metrics and export");
        return Ok(report);
    }

    report.metrics = Some(
        state
            .statistics
            .metrics()
            .await
            .context("Failed to compute simulation metrics")?,
    );
    report.dashboard_path = Some(
        state
            .statistics
            .write_dashboard(&config.simulation.visualizations_dir)
            .await
            .context("Failed to write dashboard data")?,
    );
    report.export_path = Some(
        state
            .history
            .export(&config.simulation.results_dir)
            .await
            .context("Failed to export simulation history")?,
    );

    Ok(report)
}

/// Human-readable summary printed at the end of a demo run
pub fn render_report(report: &DemoReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Collected {} vessels and {} facilities\n",
        report.vessels_collected, report.facilities_collected
    ));

    for scenario in &report.scenarios {
        let severity = scenario
            .vulnerability_analysis
            .as_ref()
            .map_or("n/a", |analysis| analysis.severity.as_str());
        out.push_str(&format!(
            "- {} [{}] {}: {}/{} steps executed, success: {}, severity: {}\n",
            scenario.target.display_name(),
            scenario.complexity,
            scenario.plan.attack_vector,
            scenario.steps_executed(),
            scenario.plan.steps.len(),
            scenario.overall_success,
            severity
        ));
    }
    for failure in &report.failures {
        out.push_str(&format!("- failed: {}\n", failure));
    }

    if let Some(metrics) = &report.metrics {
        out.push_str(&format!(
            "Success rate: {:.0}% over {} simulations (average {:.1} steps)\n",
            metrics.success_rate * 100.0,
            metrics.total_simulations,
            metrics.average_steps_executed
        ));
        for entry in &metrics.severity_distribution {
            out.push_str(&format!("  {:?}: {}\n", entry.severity, entry.count));
        }
    }
    if let Some(path) = &report.dashboard_path {
        out.push_str(&format!("Dashboard data: {}\n", path.display()));
    }
    if let Some(path) = &report.export_path {
        out.push_str(&format!("History exported to: {}\n", path.display()));
    }

    out
}
