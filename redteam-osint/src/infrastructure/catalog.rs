//! Curated critical infrastructure sites

use rand::Rng;
use redteam_core::domain::{Facility, Location};

use super::synthetic::{
    random_security_level, random_size, random_us_coordinates, synthetic_facility,
};
use crate::domain::heuristics::facility_systems;

struct KnownSite {
    id: &'static str,
    name: &'static str,
    facility_type: &'static str,
    city: &'static str,
    state: &'static str,
}

const KNOWN_SITES: [KnownSite; 5] = [
    KnownSite {
        id: "FAC10001",
        name: "Hoover Dam",
        facility_type: "Power Plant",
        city: "Boulder City",
        state: "Nevada",
    },
    KnownSite {
        id: "FAC10002",
        name: "Three Mile Island",
        facility_type: "Power Plant",
        city: "Londonderry Township",
        state: "Pennsylvania",
    },
    KnownSite {
        id: "FAC10003",
        name: "O'Hare International Airport",
        facility_type: "Transportation Hub",
        city: "Chicago",
        state: "Illinois",
    },
    KnownSite {
        id: "FAC10004",
        name: "Raven Rock Mountain Complex",
        facility_type: "Government Facility",
        city: "Liberty Township",
        state: "Pennsylvania",
    },
    KnownSite {
        id: "FAC10005",
        name: "Ashburn Data Center Alley",
        facility_type: "Data Center",
        city: "Ashburn",
        state: "Virginia",
    },
];

/// The known US sites, enriched with random size, security level and
/// coordinates, followed by synthetic sites until `limit` is reached.
///
/// Known sites are always included, so the result may exceed `limit`.
pub fn curated_facilities<R: Rng + ?Sized>(
    rng: &mut R,
    country: &str,
    limit: usize,
) -> Vec<Facility> {
    let mut facilities: Vec<Facility> = KNOWN_SITES
        .iter()
        .map(|site| Facility {
            id: site.id.to_string(),
            name: site.name.to_string(),
            facility_type: site.facility_type.to_string(),
            size: random_size(rng),
            security_level: random_security_level(rng),
            systems: facility_systems(site.facility_type, true),
            location: Location {
                city: site.city.to_string(),
                state: site.state.to_string(),
                country: "US".to_string(),
                coordinates: random_us_coordinates(rng),
            },
        })
        .collect();

    while facilities.len() < limit {
        facilities.push(synthetic_facility(rng, country));
    }
    facilities
}
