//! Configuration rooted in a temporary directory

use redteam_simulator::Config;
use std::path::Path;

pub const AIS_CSV: &str = "\
MMSI,BaseDateTime,LAT,LON,SOG,COG,VesselName,VesselType,Status,Length,Width
366000101,2024-01-01T00:00:00,29.70,-94.90,11.2,180.0,LONE STAR,Tanker,0,,
366000202,2024-01-01T00:05:00,40.60,-74.00,0.0,0.0,EMPIRE FERRY,Passenger,5,,
";

/// Config that never leaves `root`: datasets come from a local directory
pub fn test_config(root: &Path) -> Config {
    let datasets = root.join("datasets");
    std::fs::create_dir_all(&datasets).unwrap();
    std::fs::write(datasets.join("ais.csv"), AIS_CSV).unwrap();

    let mut config = Config::default();
    config.osint.data_dir = root.join("data/osint");
    config.osint.local_dataset_dir = Some(datasets);
    config.osint.seed = Some(3);
    config.simulation.seed = Some(11);
    config.simulation.results_dir = root.join("data/scenarios");
    config.simulation.visualizations_dir = root.join("data/visualizations");
    config
}
