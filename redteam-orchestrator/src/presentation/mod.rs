//! Orchestrator presentation layer

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use controllers::{AppState, DEFAULT_LISTING_LIMIT};
pub use models::*;
pub use routes::{ApiDoc, create_router};
