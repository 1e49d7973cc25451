//! Red Team Simulator - main application library
//!
//! Wires target collection, scenario generation and the attack simulator
//! into the HTTP server and the command-line demo.

mod app;
pub mod cli;
pub mod demo;

pub use app::{AppHandle, create_app, create_app_with, setup_directories};
pub use redteam_core::{Config, init_tracing};
pub use redteam_orchestrator::AppState;

// Re-export for convenience
pub use redteam_core;
pub use redteam_llm;
pub use redteam_orchestrator;
pub use redteam_osint;
