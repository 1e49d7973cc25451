//! Red Team Orchestrator - simulation, history statistics and the HTTP API
//!
//! This crate ties target collection and scenario generation together: it
//! runs the step-by-step attack simulator, keeps the scenario history and
//! serves everything over HTTP.
//!
//! # Architecture
//!
//! ```text
//! redteam-orchestrator/
//! ├── presentation/     # HTTP layer
//! │   ├── controllers.rs # Request handlers and AppState
//! │   ├── middleware.rs  # Request logging
//! │   ├── models.rs      # DTOs with OpenAPI schemas, ApiError
//! │   └── routes.rs      # Router, CORS, Swagger UI
//! ├── application/      # Use cases
//! ├── infrastructure/   # Scenario history store and export
//! └── domain/           # Simulator, system details, metrics, attack graph
//! ```
//!
//! # API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/targets` | GET | List vessels and facilities |
//! | `/api/search` | GET | Search collected targets |
//! | `/api/simulate` | POST | Generate, simulate and analyze a scenario |
//! | `/api/history` | GET | Recorded scenarios |
//! | `/api/analysis` | GET | History metrics |
//! | `/api/analyze` | GET | Model review of the history |
//! | `/api/visualizations` | GET | Dashboard chart data |
//! | `/api/history/export` | POST | Write the history to disk |
//! | `/health` | GET | Health check |

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{HistoryStatisticsUseCase, ReviewHistoryUseCase, RunSimulationUseCase};
pub use domain::{AttackSimulator, DashboardData, SimulationError, SimulationMetrics};
pub use infrastructure::ScenarioHistory;
pub use presentation::{AppState, create_router};
