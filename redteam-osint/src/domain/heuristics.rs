//! Subsystem and security level inference from a vessel type label

use redteam_core::domain::SecurityLevel;

const BASE_SYSTEMS: [&str; 3] = ["navigation", "communication", "engine_control"];

/// Likely onboard systems for a vessel type.
///
/// Matching is a lowercase substring test; the first matching family wins.
pub fn vessel_systems(vessel_type: &str) -> Vec<String> {
    let lowered = vessel_type.to_lowercase();
    let has = |needle: &str| lowered.contains(needle);

    let extra: &[&str] = if has("cargo") || has("tanker") {
        &["cargo_management", "ballast_management"]
    } else if has("passenger") || has("cruise") {
        &["passenger_management", "entertainment_systems"]
    } else if has("military") || has("law enforcement") {
        &["weapons_systems", "surveillance_systems"]
    } else if has("fishing") {
        &["fishing_equipment", "refrigeration_systems"]
    } else {
        &["crew_systems"]
    };

    BASE_SYSTEMS
        .iter()
        .chain(extra.iter())
        .map(|s| s.to_string())
        .collect()
}

pub fn vessel_security_level(vessel_type: &str) -> SecurityLevel {
    let lowered = vessel_type.to_lowercase();
    let has = |needle: &str| lowered.contains(needle);

    if has("military") || has("law enforcement") {
        SecurityLevel::High
    } else if has("passenger") || has("cruise") || has("tanker") {
        SecurityLevel::Medium
    } else {
        SecurityLevel::Low
    }
}

/// Systems installed at a facility of the given type
pub fn facility_systems(facility_type: &str, real: bool) -> Vec<String> {
    let systems: &[&str] = match facility_type {
        "Power Plant" => &[
            "SCADA",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Power Distribution",
        ],
        "Transportation Hub" if real => &[
            "Air Traffic Control",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Passenger Management",
        ],
        "Transportation Hub" => &[
            "Traffic Management",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Passenger Management",
        ],
        "Data Center" => &[
            "Cooling Systems",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Power Management",
        ],
        "Government Facility" => &[
            "Access Control",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Communications",
        ],
        "Water Treatment" => &[
            "SCADA",
            "Physical Security",
            "IT Network",
            "Employee Access",
            "Chemical Management",
        ],
        _ => &["SCADA", "Physical Security", "IT Network", "Employee Access"],
    };
    systems.iter().map(|s| s.to_string()).collect()
}
