//! Application setup and wiring

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use redteam_core::Config;
use redteam_llm::{LlmProvider, create_provider};
use redteam_orchestrator::{AppState, create_router};
use redteam_osint::TargetProvider;

/// Router plus the state behind it, so callers can reach the history directly
pub struct AppHandle {
    pub router: Router,
    pub state: AppState,
}

/// Create every directory the simulator writes to
pub async fn setup_directories(config: &Config) -> std::io::Result<()> {
    for dir in [
        &config.osint.data_dir,
        &config.simulation.results_dir,
        &config.simulation.visualizations_dir,
    ] {
        tokio::fs::create_dir_all(dir).await?;
    }
    Ok(())
}

/// Build the application from configuration alone
pub async fn create_app(
    config: Config,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let provider = create_provider(&config.llm)?;
    let target_provider = Arc::new(TargetProvider::from_config(config.osint.clone()));
    create_app_with(config, provider, target_provider).await
}

/// Build the application around an existing model provider and target source
pub async fn create_app_with(
    config: Config,
    provider: Arc<dyn LlmProvider>,
    target_provider: Arc<TargetProvider>,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let startup_time = Instant::now();

    setup_directories(&config).await?;

    let info = provider.info();
    tracing::info!(
        provider = info.id,
        model = %config.llm.default_model,
        "Language model provider ready"
    );

    let state = AppState::new(&config, provider, target_provider);
    let router = create_router(state.clone(), &config.server);

    tracing::info!(
        startup_ms = startup_time.elapsed().as_millis(),
        "Application initialized"
    );

    Ok(AppHandle { router, state })
}
