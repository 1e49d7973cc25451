//! API request and response models

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use redteam_core::domain::{Facility, Target, TargetKind, Vessel};
use redteam_osint::SearchHit;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::SimulationError;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Target information is required")]
    pub error: String,

    /// Underlying cause, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Scenario generation failed: Authentication failed: invalid x-api-key")]
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "0.3.0")]
    pub version: String,

    pub timestamp: DateTime<Utc>,
}

/// Query for `GET /api/targets`
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TargetsQuery {
    /// maritime, infrastructure or all (default)
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Records per kind, 10 when omitted; at most `osint.max_listing_limit`
    pub limit: Option<usize>,
}

/// Target listing: one list for a single kind, both lists for `all`
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum TargetsResponse {
    Maritime(Vec<Vessel>),
    Infrastructure(Vec<Facility>),
    All {
        maritime: Vec<Vessel>,
        infrastructure: Vec<Facility>,
    },
}

/// Query for `GET /api/search`
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive text matched against every record field
    pub query: Option<String>,

    /// maritime, infrastructure or all (default)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// One search result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchHitDto {
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub data: Target,
}

impl From<SearchHit> for SearchHitDto {
    fn from(hit: SearchHit) -> Self {
        Self {
            kind: hit.kind,
            data: hit.data,
        }
    }
}

/// Body of `POST /api/simulate`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SimulateRequest {
    /// Vessel or facility record; `kind` is inferred from `mmsi` / `id` when absent
    #[schema(value_type = Object, example = json!({"mmsi": "366999999", "vessel_type": "Cargo"}))]
    pub target: Option<serde_json::Value>,

    /// low, medium, high or critical
    #[schema(example = "high")]
    pub complexity: Option<String>,
}

/// Result of `POST /api/history/export`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportResponse {
    pub path: String,
    pub scenarios: usize,
}

/// Failure of an API handler, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        error: String,
        details: Option<String>,
    },
    NotFound(String),
    Internal {
        error: String,
        details: String,
    },
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::BadRequest {
            error: error.into(),
            details: None,
        }
    }

    pub fn invalid(error: impl Into<String>, details: impl ToString) -> Self {
        Self::BadRequest {
            error: error.into(),
            details: Some(details.to_string()),
        }
    }

    /// Empty history maps to 404, anything else to 500 under `context`
    pub fn from_simulation(context: &str, err: SimulationError) -> Self {
        if err.is_empty_history() {
            Self::NotFound(err.to_string())
        } else {
            Self::Internal {
                error: context.to_string(),
                details: err.to_string(),
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest { error, details } => ErrorResponse { error, details },
            Self::NotFound(error) => ErrorResponse {
                error,
                details: None,
            },
            Self::Internal { error, details } => {
                tracing::error!(status = %status, error = %error, details = %details, "Request failed");
                ErrorResponse {
                    error,
                    details: Some(details),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
