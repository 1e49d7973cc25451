//! Synthetic telemetry for the analyst prompt

use rand::Rng;
use rand::seq::IndexedRandom;
use redteam_core::domain::{
    AuthenticationMethod, ConfigurationClass, EncryptionLevel, SecurityControls, SubsystemDetail,
    SystemDetails,
};
use std::collections::BTreeMap;

/// Invent an inventory entry for each named system plus the perimeter controls
pub fn generate_system_details<R: Rng + ?Sized>(systems: &[String], rng: &mut R) -> SystemDetails {
    let detailed_systems: BTreeMap<String, SubsystemDetail> = systems
        .iter()
        .map(|name| (name.clone(), subsystem_detail(rng)))
        .collect();

    SystemDetails {
        detailed_systems,
        security_controls: SecurityControls {
            firewall: rng.random_bool(0.5),
            ids: rng.random_bool(0.5),
            encryption: pick(&EncryptionLevel::ALL, rng),
            authentication: pick(&AuthenticationMethod::ALL, rng),
        },
    }
}

fn subsystem_detail<R: Rng + ?Sized>(rng: &mut R) -> SubsystemDetail {
    SubsystemDetail {
        version: format!("{}.{}", rng.random_range(1..=10), rng.random_range(0..=9)),
        patch_level: format!("P{}", rng.random_range(1..=20)),
        configuration: pick(&ConfigurationClass::ALL, rng),
        known_vulnerabilities: rng.random_range(0..=5),
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T; 3], rng: &mut R) -> T {
    // Arrays are never empty
    *options.choose(rng).unwrap_or(&options[0])
}
