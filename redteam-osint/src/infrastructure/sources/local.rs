use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::DatasetSource;
use crate::domain::FetchError;

/// Serves every file in a directory, sorted by name, regardless of the
/// requested dataset
pub struct LocalDatasetSource {
    dir: PathBuf,
}

impl LocalDatasetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DatasetSource for LocalDatasetSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch(&self, dataset: &str) -> Result<Vec<PathBuf>, FetchError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| FetchError::io(&self.dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FetchError::io(&self.dir, e))?
        {
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        debug!(dataset, dir = %self.dir.display(), files = files.len(), "Listed local dataset");
        Ok(files)
    }
}
