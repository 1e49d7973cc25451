//! Vessel extraction from AIS position report CSV files

use csv::{ReaderBuilder, StringRecord};
use rand::Rng;
use redteam_core::domain::{Position, Vessel};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::domain::FetchError;
use crate::domain::heuristics::{vessel_security_level, vessel_systems};

/// Column positions resolved from the header row
struct Columns {
    mmsi: usize,
    base_date_time: Option<usize>,
    vessel_name: Option<usize>,
    vessel_type: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    length: Option<usize>,
    width: Option<usize>,
    course: Option<usize>,
    speed: Option<usize>,
    destination: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, FetchError> {
        let find = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|h| h.trim() == *name))
        };

        Ok(Self {
            mmsi: find(&["MMSI"]).ok_or(FetchError::MissingColumn("MMSI"))?,
            base_date_time: find(&["BaseDateTime"]),
            vessel_name: find(&["VesselName"]),
            vessel_type: find(&["VesselType", "ShipType"]),
            latitude: find(&["LAT", "Latitude"]),
            longitude: find(&["LON", "Longitude"]),
            length: find(&["Length"]),
            width: find(&["Width"]),
            course: find(&["Course", "COG"]),
            speed: find(&["Speed", "SOG"]),
            destination: find(&["Destination"]),
        })
    }
}

fn cell(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column
        .and_then(|idx| record.get(idx))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn number(record: &StringRecord, column: Option<usize>) -> Option<f64> {
    cell(record, column).and_then(|value| value.parse().ok())
}

/// Read `path` and build at most `max_vessels` vessels, one per MMSI.
///
/// Vessels come out ordered by MMSI. When a `BaseDateTime` column exists the
/// latest report per vessel wins, otherwise the first one seen.
pub fn extract_vessels<R: Rng + ?Sized>(
    path: &Path,
    max_vessels: usize,
    rng: &mut R,
) -> Result<Vec<Vessel>, FetchError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    let columns = Columns::resolve(reader.headers()?)?;

    let mut latest: BTreeMap<String, StringRecord> = BTreeMap::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        let Some(mmsi) = cell(&record, Some(columns.mmsi)) else {
            continue;
        };

        match latest.get(mmsi) {
            Some(current) => {
                // ISO-8601 timestamps order correctly as strings
                let newer = match columns.base_date_time {
                    Some(_) => {
                        cell(&record, columns.base_date_time)
                            > cell(current, columns.base_date_time)
                    }
                    None => false,
                };
                if newer {
                    latest.insert(mmsi.to_string(), record);
                }
            }
            None => {
                latest.insert(mmsi.to_string(), record);
            }
        }
    }

    debug!(rows, vessels = latest.len(), "AIS rows grouped by MMSI");

    let vessels: Vec<Vessel> = latest
        .iter()
        .take(max_vessels)
        .map(|(mmsi, record)| build_vessel(mmsi, record, &columns, rng))
        .collect();

    if vessels.is_empty() {
        return Err(FetchError::EmptyExtraction);
    }
    Ok(vessels)
}

fn build_vessel<R: Rng + ?Sized>(
    mmsi: &str,
    record: &StringRecord,
    columns: &Columns,
    rng: &mut R,
) -> Vessel {
    let vessel_type = cell(record, columns.vessel_type)
        .unwrap_or("Unknown")
        .to_string();

    Vessel {
        mmsi: mmsi.to_string(),
        imo: format!("IMO{}", rng.random_range(1_000_000..=9_999_999)),
        vessel_name: cell(record, columns.vessel_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("VESSEL_{}", mmsi)),
        length: number(record, columns.length)
            .unwrap_or_else(|| f64::from(rng.random_range(50..=300u32))),
        width: number(record, columns.width)
            .unwrap_or_else(|| f64::from(rng.random_range(10..=50u32))),
        position: Position {
            latitude: number(record, columns.latitude).unwrap_or(0.0),
            longitude: number(record, columns.longitude).unwrap_or(0.0),
        },
        course: number(record, columns.course).unwrap_or(0.0),
        speed: number(record, columns.speed).unwrap_or(0.0),
        destination: cell(record, columns.destination)
            .unwrap_or("Unknown")
            .to_string(),
        systems: vessel_systems(&vessel_type),
        security_level: vessel_security_level(&vessel_type),
        vessel_type,
    }
}
