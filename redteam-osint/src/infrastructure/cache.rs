//! JSON file cache for collected records

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::domain::CacheError;

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// One JSON document per file under a directory
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read `name`; `Ok(None)` when the file does not exist
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CacheError> {
        let path = self.path(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CacheError::Malformed { path, source })
    }

    /// Read `name` only if it was modified less than `ttl` ago
    pub async fn read_fresh<T: DeserializeOwned>(
        &self,
        name: &str,
        ttl: Duration,
    ) -> Result<Option<T>, CacheError> {
        let path = self.path(name);
        let modified = match tokio::fs::metadata(&path).await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        if age >= ttl {
            debug!(path = %path.display(), age_secs = age.as_secs(), "Cache file is stale");
            return Ok(None);
        }

        self.read(name).await
    }

    /// Write `value` as pretty-printed JSON, creating the directory if needed.
    ///
    /// The file is replaced in one rename, so a concurrent `read` sees either
    /// the old document or the new one.
    pub async fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CacheError> {
        let path = self.path(name);
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| CacheError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let bytes = serde_json::to_vec_pretty(value).map_err(|source| CacheError::Malformed {
            path: path.clone(),
            source,
        })?;

        let tmp = self.dir.join(format!(
            ".{}.{}-{}.tmp",
            name,
            std::process::id(),
            WRITE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        if let Err(source) = tokio::fs::write(&tmp, bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(CacheError::Io { path: tmp, source });
        }
        if let Err(source) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(CacheError::Io {
                path: path.clone(),
                source,
            });
        }

        debug!(path = %path.display(), "Cache file written");
        Ok(())
    }
}
