//! Red Team Core - foundation crate for the red team simulator
//!
//! This crate provides the pieces every other crate in the workspace depends on:
//!
//! # Modules
//!
//! - [`config`]: Strongly-typed configuration with TOML and environment variable support
//! - [`domain`]: Targets, scenarios, step results and analysis records
//! - [`logging`]: Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! redteam-core/
//! ├── domain/
//! │   ├── target/     # Vessels, facilities, the Target enum
//! │   ├── scenario/   # Scenario entity, attack plans, step results
//! │   └── analysis/   # System details, vulnerability analysis, history reports
//! ├── config/         # Configuration management and validation
//! └── logging.rs      # tracing-subscriber setup
//! ```
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use redteam_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `REDTEAM__` prefix with double underscore separators:
//!
//! ```bash
//! REDTEAM__SERVER__PORT=8080
//! REDTEAM__LLM__PROVIDER=anthropic
//! REDTEAM__SIMULATION__SEED=42
//! ```
//!
//! # Logging
//!
//! ```rust,ignore
//! use redteam_core::init_tracing;
//!
//! init_tracing(&config.logging)?;
//! ```

pub mod config;
pub mod domain;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
