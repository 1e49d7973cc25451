//! Test data fixtures for redteam-osint

use async_trait::async_trait;
use redteam_core::config::OsintConfig;
use redteam_osint::{DatasetSource, FetchError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SAMPLE_AIS_CSV: &str = "\
MMSI,BaseDateTime,LAT,LON,SOG,COG,VesselName,VesselType,Length,Width,Destination
366999001,2023-03-01T10:00:00,29.71,-94.98,12.1,180.0,GULF TRADER,Tanker,228,32,HOUSTON
366999002,2023-03-01T09:00:00,40.64,-74.02,0.0,0.0,HARBOR QUEEN,Passenger,90,18,NEW YORK
366999003,2023-03-01T08:00:00,47.60,-122.34,8.4,270.0,NORTHERN HAUL,Fishing,45,11,SEATTLE
366999001,2023-03-01T12:00:00,29.60,-94.90,11.8,182.0,GULF TRADER,Tanker,228,32,HOUSTON
";

/// Provider configuration rooted in `dir` with a fixed seed
pub fn test_config(dir: &Path) -> OsintConfig {
    OsintConfig {
        data_dir: dir.join("osint"),
        seed: Some(7),
        target_pool_size: 20,
        ..OsintConfig::default()
    }
}

/// Directory containing a single AIS CSV file
pub fn dataset_dir(root: &Path) -> PathBuf {
    let dir = root.join("dataset");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("ais.csv"), SAMPLE_AIS_CSV).unwrap();
    dir
}

/// Source that always fails and counts how often it was asked
#[derive(Default)]
pub struct FailingSource {
    pub calls: AtomicUsize,
}

impl FailingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self, _dataset: &str) -> Result<Vec<PathBuf>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::Status {
            status: 503,
            message: "dataset host unavailable".to_string(),
        })
    }
}
