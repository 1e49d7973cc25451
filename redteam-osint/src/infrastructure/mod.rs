//! Dataset sources, parsing, caching and synthetic data

pub mod ais;
pub mod cache;
pub mod catalog;
pub mod sources;
pub mod synthetic;

pub use cache::JsonFileCache;
pub use sources::{DatasetSource, HttpDatasetSource, LocalDatasetSource};
