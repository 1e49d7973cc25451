use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

use super::DatasetSource;
use crate::domain::FetchError;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Downloads `<base_url>/<dataset>` and stores the body as a CSV file
pub struct HttpDatasetSource {
    client: Client,
    base_url: String,
    download_dir: PathBuf,
    credentials: Option<(String, String)>,
}

impl HttpDatasetSource {
    pub fn new(
        base_url: impl Into<String>,
        download_dir: impl Into<PathBuf>,
        timeout_seconds: u64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("redteam-simulator/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            download_dir: download_dir.into(),
            credentials: None,
        }
    }

    /// Send HTTP basic auth with every download
    pub fn with_credentials(mut self, username: impl Into<String>, key: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), key.into()));
        self
    }

    fn file_name(dataset: &str) -> String {
        format!("{}.csv", dataset.replace(['/', '\\'], "_"))
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, dataset: &str) -> Result<Vec<PathBuf>, FetchError> {
        let url = format!("{}/{}", self.base_url, dataset);
        info!(%url, "Downloading dataset");

        let mut request = self.client.get(&url);
        if let Some((username, key)) = &self.credentials {
            request = request.basic_auth(username, Some(key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        if body.starts_with(ZIP_MAGIC) {
            return Err(FetchError::UnsupportedArchive {
                dataset: dataset.to_string(),
            });
        }

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| FetchError::io(&self.download_dir, e))?;
        let path = self.download_dir.join(Self::file_name(dataset));
        tokio::fs::write(&path, &body)
            .await
            .map_err(|e| FetchError::io(&path, e))?;

        debug!(path = %path.display(), bytes = body.len(), "Dataset stored");
        Ok(vec![path])
    }
}
