//! API controllers

use axum::{
    extract::{Query, State, rejection::JsonRejection},
    response::Json,
};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;

use redteam_core::Config;
use redteam_core::domain::{Complexity, HistoryReport, Scenario, Target};
use redteam_llm::{AnalyzeHistoryUseCase, LlmProvider};
use redteam_osint::{SearchScope, TargetProvider};

use crate::application::{HistoryStatisticsUseCase, ReviewHistoryUseCase, RunSimulationUseCase};
use crate::domain::{DashboardData, SimulationMetrics};
use crate::infrastructure::ScenarioHistory;
use crate::presentation::models::{
    ApiError, ErrorResponse, ExportResponse, HealthResponse, SearchHitDto, SearchQuery,
    SimulateRequest, TargetsQuery, TargetsResponse,
};

/// Records per kind returned by the target listing when no limit is given
pub const DEFAULT_LISTING_LIMIT: usize = 10;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub target_provider: Arc<TargetProvider>,
    pub run_simulation: Arc<RunSimulationUseCase>,
    pub review_history: Arc<ReviewHistoryUseCase>,
    pub statistics: Arc<HistoryStatisticsUseCase>,
    pub history: ScenarioHistory,
    pub default_complexity: Complexity,
    pub results_dir: PathBuf,
}

impl AppState {
    /// Wire every use case around one fresh history
    pub fn new(
        config: &Config,
        provider: Arc<dyn LlmProvider>,
        target_provider: Arc<TargetProvider>,
    ) -> Self {
        let history = ScenarioHistory::new();
        let default_complexity = config
            .simulation
            .default_complexity
            .parse()
            .unwrap_or_default();

        Self {
            target_provider,
            run_simulation: Arc::new(RunSimulationUseCase::new(
                provider.clone(),
                config.llm.clone(),
                &config.simulation,
                history.clone(),
            )),
            review_history: Arc::new(ReviewHistoryUseCase::new(
                AnalyzeHistoryUseCase::new(provider, config.llm.clone()),
                history.clone(),
            )),
            statistics: Arc::new(HistoryStatisticsUseCase::new(history.clone())),
            history,
            default_complexity,
            results_dir: config.simulation.results_dir.clone(),
        }
    }
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /api/targets - List collected vessels and facilities
#[utoipa::path(
    get,
    path = "/api/targets",
    params(TargetsQuery),
    responses(
        (status = 200, description = "Target lists", body = TargetsResponse),
        (status = 400, description = "Unknown target type or limit too large", body = ErrorResponse)
    ),
    tag = "targets"
)]
pub async fn list_targets(
    State(state): State<AppState>,
    Query(query): Query<TargetsQuery>,
) -> Result<Json<TargetsResponse>, ApiError> {
    let scope: SearchScope = query
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| ApiError::invalid("Invalid target type", e))?;
    let provider = &state.target_provider;
    let limit = query.limit.unwrap_or(DEFAULT_LISTING_LIMIT);
    let max_limit = provider.config().max_listing_limit;
    if limit > max_limit {
        return Err(ApiError::invalid(
            "Invalid limit",
            format!("limit must be at most {}, got {}", max_limit, limit),
        ));
    }
    let country = provider.config().default_country.clone();

    let response = match scope {
        SearchScope::Maritime => TargetsResponse::Maritime(provider.collect_vessels(limit).await),
        SearchScope::Infrastructure => {
            TargetsResponse::Infrastructure(provider.collect_facilities(&country, limit).await)
        }
        SearchScope::All => TargetsResponse::All {
            maritime: provider.collect_vessels(limit).await,
            infrastructure: provider.collect_facilities(&country, limit).await,
        },
    };

    Ok(Json(response))
}

/// GET /api/search - Search collected targets
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching records", body = Vec<SearchHitDto>),
        (status = 400, description = "Missing query or unknown type", body = ErrorResponse)
    ),
    tag = "targets"
)]
pub async fn search_targets(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHitDto>>, ApiError> {
    let text = query
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter is required"))?;
    let scope: SearchScope = query
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| ApiError::invalid("Invalid target type", e))?;

    let hits = state.target_provider.search(text, scope).await;
    Ok(Json(hits.into_iter().map(SearchHitDto::from).collect()))
}

/// POST /api/simulate - Generate, simulate and analyze a scenario
#[utoipa::path(
    post,
    path = "/api/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Analyzed scenario", body = Scenario),
        (status = 400, description = "Missing body, target or invalid complexity", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "simulation"
)]
pub async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<Scenario>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::invalid("No data provided", e.body_text()))?;

    let raw_target = request
        .target
        .filter(|t| !t.is_null())
        .ok_or_else(|| ApiError::bad_request("Target information is required"))?;
    let target = Target::from_value(raw_target).map_err(|e| ApiError::invalid("Invalid target", e))?;

    let complexity = match request.complexity.as_deref() {
        Some(raw) => raw
            .parse::<Complexity>()
            .map_err(|e| ApiError::invalid("Invalid complexity", e))?,
        None => state.default_complexity,
    };

    let scenario = state
        .run_simulation
        .execute(&target, complexity)
        .await
        .map_err(|e| ApiError::from_simulation("Error running simulation", e))?;

    Ok(Json(scenario))
}

/// GET /api/history - Every recorded scenario
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Recorded scenarios in order", body = Vec<Scenario>)
    ),
    tag = "simulation"
)]
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<Scenario>> {
    Json(state.history.all().await)
}

/// GET /api/analysis - Aggregate metrics over the history
#[utoipa::path(
    get,
    path = "/api/analysis",
    responses(
        (status = 200, description = "History metrics", body = SimulationMetrics),
        (status = 404, description = "No simulation results available", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn get_analysis(
    State(state): State<AppState>,
) -> Result<Json<SimulationMetrics>, ApiError> {
    state
        .statistics
        .metrics()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_simulation("Error computing metrics", e))
}

/// GET /api/analyze - Model review of the history
#[utoipa::path(
    get,
    path = "/api/analyze",
    responses(
        (status = 200, description = "Sectioned history report", body = HistoryReport),
        (status = 404, description = "No simulation results available", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryReport>, ApiError> {
    state
        .review_history
        .execute()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_simulation("Error analyzing results", e))
}

/// GET /api/visualizations - Chart data for the dashboard
#[utoipa::path(
    get,
    path = "/api/visualizations",
    responses(
        (status = 200, description = "Metrics, outcome rates and attack graph", body = DashboardData),
        (status = 404, description = "No simulation results available", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn get_visualizations(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, ApiError> {
    state
        .statistics
        .dashboard()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_simulation("Error generating visualizations", e))
}

/// POST /api/history/export - Write the history to the results directory
#[utoipa::path(
    post,
    path = "/api/history/export",
    responses(
        (status = 200, description = "History written", body = ExportResponse),
        (status = 404, description = "No simulation results available", body = ErrorResponse),
        (status = 500, description = "Write failed", body = ErrorResponse)
    ),
    tag = "simulation"
)]
pub async fn export_history(
    State(state): State<AppState>,
) -> Result<Json<ExportResponse>, ApiError> {
    let path = state
        .history
        .export(&state.results_dir)
        .await
        .map_err(|e| ApiError::from_simulation("Error exporting results", e))?;

    Ok(Json(ExportResponse {
        path: path.display().to_string(),
        scenarios: state.history.len().await,
    }))
}
