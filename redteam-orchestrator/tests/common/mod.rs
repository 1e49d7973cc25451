//! Shared fixtures for orchestrator integration tests

pub mod fixtures;
pub mod helpers;
