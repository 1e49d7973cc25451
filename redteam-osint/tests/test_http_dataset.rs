//! End-to-end vessel collection through an HTTP dataset source

use redteam_osint::{HttpDatasetSource, TargetProvider};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::fixtures::{SAMPLE_AIS_CSV, test_config};

#[tokio::test]
async fn test_downloaded_csv_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eminserkanerdonmez/ais-dataset"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_AIS_CSV))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let source = Arc::new(HttpDatasetSource::new(
        server.uri(),
        config.data_dir.join("datasets"),
        5,
    ));
    let provider = TargetProvider::new(config, source);

    let vessels = provider.collect_vessels(10).await;
    assert_eq!(vessels.len(), 3);
    assert_eq!(vessels[0].vessel_name, "GULF TRADER");

    // Served from cache; the mock expects exactly one download
    assert_eq!(provider.collect_vessels(10).await.len(), 3);
}

#[tokio::test]
async fn test_zip_download_falls_back_to_synthetic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04....".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let source = Arc::new(HttpDatasetSource::new(server.uri(), dir.path(), 5));

    let vessels = TargetProvider::new(config, source).collect_vessels(4).await;
    assert_eq!(vessels.len(), 4);
    assert!(vessels.iter().all(|v| v.imo.starts_with("IMO")));
}
