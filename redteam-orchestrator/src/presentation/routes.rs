//! Route definitions and server setup

use axum::http::StatusCode;
use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use redteam_core::config::ServerConfig;
use redteam_core::domain::{
    AttackPlan, AttackerProfile, AuthenticationMethod, Complexity, ConfigurationClass,
    EncryptionLevel, Facility, FacilitySize, HistoryReport, Location, Position, ReportSection,
    Scenario, ScenarioStatus, SecurityLevel, StepResult, Target, TargetKind, Vessel,
    VulnerabilityAnalysis,
};

use crate::domain::{
    AttackGraph, DashboardData, GraphEdge, GraphNode, NodeKind, OutcomeRates, Severity,
    SeverityCount, SimulationMetrics,
};
use crate::presentation::{
    controllers::{
        AppState, analyze_history, export_history, get_analysis, get_history, get_visualizations,
        health_check, list_targets, search_targets, simulate,
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::health_check,
        crate::presentation::controllers::list_targets,
        crate::presentation::controllers::search_targets,
        crate::presentation::controllers::simulate,
        crate::presentation::controllers::get_history,
        crate::presentation::controllers::get_analysis,
        crate::presentation::controllers::analyze_history,
        crate::presentation::controllers::get_visualizations,
        crate::presentation::controllers::export_history
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            TargetsResponse,
            SearchHitDto,
            SimulateRequest,
            ExportResponse,
            Target,
            TargetKind,
            Vessel,
            Facility,
            FacilitySize,
            SecurityLevel,
            Position,
            Location,
            Scenario,
            ScenarioStatus,
            Complexity,
            AttackPlan,
            AttackerProfile,
            StepResult,
            VulnerabilityAnalysis,
            ConfigurationClass,
            EncryptionLevel,
            AuthenticationMethod,
            HistoryReport,
            ReportSection,
            SimulationMetrics,
            Severity,
            SeverityCount,
            DashboardData,
            OutcomeRates,
            AttackGraph,
            GraphNode,
            GraphEdge,
            NodeKind
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "targets", description = "Collected vessels and infrastructure facilities"),
        (name = "simulation", description = "Scenario generation, simulation and history"),
        (name = "analysis", description = "Metrics, chart data and model review of the history")
    ),
    info(
        title = "Red Team Simulator API",
        version = "0.3.0",
        description = "Generates red team attack scenarios against maritime and critical infrastructure targets with a language model, simulates them step by step and analyzes the outcome."
    )
)]
pub struct ApiDoc;

async fn root_handler() -> Response {
    axum::Json(serde_json::json!({
        "name": "Red Team Simulator API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "LLM-driven red team scenario generator and attack simulator",
        "endpoints": {
            "health": "/health",
            "targets": "/api/targets",
            "search": "/api/search",
            "simulate": "/api/simulate",
            "history": "/api/history",
            "analysis": "/api/analysis",
            "analyze": "/api/analyze",
            "visualizations": "/api/visualizations",
            "export": "/api/history/export",
            "docs": "/docs"
        }
    }))
    .into_response()
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::OPTIONS,
    ];
    let headers = [
        axum::http::header::CONTENT_TYPE,
        axum::http::header::ACCEPT,
        axum::http::header::ORIGIN,
    ];

    if server.allowed_origins.len() == 1 && server.allowed_origins[0] == "*" {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(methods)
            .allow_headers(headers)
            .max_age(Duration::from_secs(3600));
    }

    let origins: Vec<axum::http::HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            axum::http::HeaderValue::from_str(origin)
                .map_err(|_| {
                    tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(3600))
}

/// Create the application router with its middleware stack
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/targets", get(list_targets))
        .route("/search", get(search_targets))
        .route("/simulate", post(simulate))
        .route("/history", get(get_history))
        .route("/history/export", post(export_history))
        .route("/analysis", get(get_analysis))
        .route("/analyze", get(analyze_history))
        .route("/visualizations", get(get_visualizations));

    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest("/api", api_routes);

    if server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ))
        .layer(middleware::from_fn(logging_middleware));

    router.layer(service_builder).with_state(state)
}
