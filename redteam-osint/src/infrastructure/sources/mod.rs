//! Where raw datasets come from

mod http;
mod local;

pub use http::HttpDatasetSource;
pub use local::LocalDatasetSource;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::FetchError;

/// Makes a named dataset available as local files
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Download (or locate) `dataset` and return the paths of its files
    async fn fetch(&self, dataset: &str) -> Result<Vec<PathBuf>, FetchError>;
}
