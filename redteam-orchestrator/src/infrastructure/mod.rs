//! Orchestrator infrastructure

pub mod history;

pub use history::ScenarioHistory;
