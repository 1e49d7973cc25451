//! Application layer for target collection

pub mod target_provider;

pub use target_provider::{MARITIME_CACHE_FILE, TargetProvider, infrastructure_cache_file};
