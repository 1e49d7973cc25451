//! Error types for target collection

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain real records from an external source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataset source returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Dataset '{dataset}' was delivered as a zip archive, which is not supported")]
    UnsupportedArchive { dataset: String },

    #[error("No CSV file found among {count} dataset files")]
    NoCsvFile { count: usize },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("No vessels could be extracted from the dataset")]
    EmptyExtraction,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure to read or write a JSON cache file
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache file {} could not be accessed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache file {} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
