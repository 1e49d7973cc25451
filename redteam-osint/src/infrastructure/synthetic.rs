//! Uniformly random stand-in records used when real data is unavailable

use rand::Rng;
use rand::seq::IndexedRandom;
use redteam_core::domain::{Facility, FacilitySize, Location, Position, SecurityLevel, Vessel};

use crate::domain::heuristics::facility_systems;

const VESSEL_TYPES: [&str; 5] = ["Cargo", "Tanker", "Passenger", "Military", "Fishing"];
const DESTINATIONS: [&str; 5] = ["NEW YORK", "ROTTERDAM", "SINGAPORE", "SHANGHAI", "DUBAI"];
const VESSEL_SYSTEMS: [&str; 7] = [
    "navigation",
    "communication",
    "cargo_management",
    "crew_systems",
    "engine_control",
    "ballast_management",
    "security_systems",
];

pub const FACILITY_TYPES: [&str; 5] = [
    "Power Plant",
    "Water Treatment",
    "Transportation Hub",
    "Data Center",
    "Government Facility",
];

/// Continental US bounding box used for facility coordinates
const US_LATITUDE: std::ops::Range<f64> = 25.0..49.0;
const US_LONGITUDE: std::ops::Range<f64> = -125.0..-66.0;

pub(crate) fn choose<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn random_security_level<R: Rng + ?Sized>(rng: &mut R) -> SecurityLevel {
    SecurityLevel::ALL.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn random_size<R: Rng + ?Sized>(rng: &mut R) -> FacilitySize {
    FacilitySize::ALL.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn random_us_coordinates<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position {
        latitude: rng.random_range(US_LATITUDE),
        longitude: rng.random_range(US_LONGITUDE),
    }
}

pub fn synthetic_vessel<R: Rng + ?Sized>(rng: &mut R) -> Vessel {
    let system_count = rng.random_range(3..=5);
    let systems = VESSEL_SYSTEMS
        .choose_multiple(rng, system_count)
        .map(|s| s.to_string())
        .collect();

    Vessel {
        mmsi: rng.random_range(100_000_000..=999_999_999u32).to_string(),
        imo: format!("IMO{}", rng.random_range(1_000_000..=9_999_999)),
        vessel_name: format!("VESSEL{}", rng.random_range(1000..=9999)),
        vessel_type: choose(rng, &VESSEL_TYPES).to_string(),
        length: f64::from(rng.random_range(50..=300u32)),
        width: f64::from(rng.random_range(10..=50u32)),
        position: Position {
            latitude: rng.random_range(-90.0..90.0),
            longitude: rng.random_range(-180.0..180.0),
        },
        course: rng.random_range(0.0..359.0),
        speed: rng.random_range(0.0..20.0),
        destination: choose(rng, &DESTINATIONS).to_string(),
        systems,
        security_level: random_security_level(rng),
    }
}

pub fn synthetic_vessels<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Vessel> {
    (0..count).map(|_| synthetic_vessel(rng)).collect()
}

fn facility_name<R: Rng + ?Sized>(rng: &mut R, facility_type: &str) -> String {
    let parts: &[&[&str]] = match facility_type {
        "Power Plant" => &[
            &["Grand", "Central", "Northern", "Western", "Eastern"],
            &["Power", "Energy", "Electric"],
            &["Plant", "Station", "Facility"],
        ],
        "Water Treatment" => &[
            &["City", "Regional", "Municipal", "County"],
            &["Water", "Wastewater"],
            &["Plant", "Facility", "Treatment Center"],
        ],
        "Transportation Hub" => &[
            &["International", "Regional", "Municipal", "Central"],
            &["Airport", "Train Station", "Bus Terminal", "Port"],
        ],
        "Data Center" => &[
            &["Secure", "Cloud", "Enterprise", "Global"],
            &["Data", "Computing", "Server"],
            &["Center", "Facility", "Hub"],
        ],
        _ => &[
            &["Federal", "State", "Regional", "National"],
            &["Operations", "Command", "Administrative", "Security"],
            &["Center", "Facility", "Building"],
        ],
    };

    parts
        .iter()
        .map(|words| choose(rng, words))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn synthetic_facility<R: Rng + ?Sized>(rng: &mut R, country: &str) -> Facility {
    let facility_type = choose(rng, &FACILITY_TYPES);

    Facility {
        id: format!("FAC{}", rng.random_range(10_000..=99_999)),
        name: facility_name(rng, facility_type),
        facility_type: facility_type.to_string(),
        size: random_size(rng),
        security_level: random_security_level(rng),
        systems: facility_systems(facility_type, false),
        location: Location {
            city: format!("City{}", rng.random_range(1..=50)),
            state: format!("State{}", rng.random_range(1..=20)),
            country: country.to_string(),
            coordinates: random_us_coordinates(rng),
        },
    }
}

pub fn synthetic_facilities<R: Rng + ?Sized>(
    rng: &mut R,
    country: &str,
    count: usize,
) -> Vec<Facility> {
    (0..count).map(|_| synthetic_facility(rng, country)).collect()
}
