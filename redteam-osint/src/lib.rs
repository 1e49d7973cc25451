//! Red Team OSINT - target collection for the red team simulator
//!
//! Supplies vessels (from an AIS position report dataset) and critical
//! infrastructure facilities (from a curated catalog) as simulation targets.
//!
//! # Collection pipeline
//!
//! Every collection runs in two stages:
//!
//! 1. **fetch**: read the JSON cache, or pull the dataset through a
//!    [`DatasetSource`] and extract records from it
//! 2. **fallback**: on any fetch error, log it and generate uniformly random
//!    synthetic records instead
//!
//! Callers of [`TargetProvider`] therefore never see an error and never get
//! an empty list.
//!
//! # Usage
//!
//! ```rust,ignore
//! use redteam_osint::TargetProvider;
//! use redteam_core::domain::TargetKind;
//!
//! let provider = TargetProvider::from_config(config.osint.clone());
//! let vessel = provider.get_target(TargetKind::Maritime, Some("366999999")).await;
//! ```
//!
//! # Architecture
//!
//! ```text
//! redteam-osint/
//! ├── domain/          # FetchError, CacheError, heuristics, search types
//! ├── infrastructure/  # dataset sources, AIS CSV extraction, cache, catalog, synthetic data
//! └── application/     # TargetProvider
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{MARITIME_CACHE_FILE, TargetProvider, infrastructure_cache_file};
pub use domain::{CacheError, FetchError, SearchHit, SearchScope};
pub use infrastructure::{DatasetSource, HttpDatasetSource, JsonFileCache, LocalDatasetSource};
