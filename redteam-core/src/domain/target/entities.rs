//! Target entities

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::value_objects::{
    FacilitySize, Location, Position, SecurityLevel, TargetKind, string_or_number,
};

fn unknown() -> String {
    "Unknown".to_string()
}

/// A vessel built from AIS position reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vessel {
    /// Maritime Mobile Service Identity
    #[serde(deserialize_with = "string_or_number")]
    pub mmsi: String,
    #[serde(default)]
    pub imo: String,
    #[serde(default)]
    pub vessel_name: String,
    #[serde(default = "unknown")]
    pub vessel_type: String,
    /// Length overall in metres
    #[serde(default)]
    pub length: f64,
    /// Beam in metres
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub position: Position,
    /// Course over ground in degrees
    #[serde(default)]
    pub course: f64,
    /// Speed over ground in knots
    #[serde(default)]
    pub speed: f64,
    #[serde(default = "unknown")]
    pub destination: String,
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub security_level: SecurityLevel,
}

/// A critical infrastructure facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Facility {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// e.g. "Power Plant", "Data Center"
    #[serde(default = "unknown", alias = "type")]
    pub facility_type: String,
    #[serde(default)]
    pub size: FacilitySize,
    #[serde(default)]
    pub security_level: SecurityLevel,
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub location: Location,
}

/// Anything a scenario can be generated against.
///
/// On the wire the record is flattened next to a `"kind"` discriminator:
///
/// ```json
/// { "kind": "maritime", "mmsi": "366999999", "vessel_type": "Cargo" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Maritime(Vessel),
    Infrastructure(Facility),
}

/// Error raised when a JSON document cannot be read as a [`Target`]
#[derive(Debug, thiserror::Error)]
pub enum TargetParseError {
    #[error("Target must be a JSON object")]
    NotAnObject,

    #[error("Cannot infer target kind: expected a 'kind', 'mmsi', 'imo' or 'id' field")]
    UnknownKind,

    #[error("Invalid target: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl Target {
    /// Read a target from loosely-shaped JSON.
    ///
    /// When `kind` is missing it is inferred: an `mmsi` or `imo` field means
    /// maritime, an `id` field means infrastructure. A vessel still needs its
    /// `mmsi`.
    pub fn from_value(value: Value) -> Result<Self, TargetParseError> {
        let Value::Object(mut object) = value else {
            return Err(TargetParseError::NotAnObject);
        };

        if !object.contains_key("kind") {
            let kind = if object.contains_key("mmsi") || object.contains_key("imo") {
                TargetKind::Maritime
            } else if object.contains_key("id") {
                TargetKind::Infrastructure
            } else {
                return Err(TargetParseError::UnknownKind);
            };
            object.insert("kind".to_string(), Value::String(kind.to_string()));
        }

        Ok(serde_json::from_value(Value::Object(object))?)
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Maritime(_) => TargetKind::Maritime,
            Self::Infrastructure(_) => TargetKind::Infrastructure,
        }
    }

    /// MMSI for vessels, facility id for facilities
    pub fn identifier(&self) -> &str {
        match self {
            Self::Maritime(vessel) => &vessel.mmsi,
            Self::Infrastructure(facility) => &facility.id,
        }
    }

    /// Human-readable label, falling back to the identifier
    pub fn display_name(&self) -> &str {
        let name = match self {
            Self::Maritime(vessel) => &vessel.vessel_name,
            Self::Infrastructure(facility) => &facility.name,
        };
        if name.is_empty() {
            self.identifier()
        } else {
            name
        }
    }

    pub fn systems(&self) -> &[String] {
        match self {
            Self::Maritime(vessel) => &vessel.systems,
            Self::Infrastructure(facility) => &facility.systems,
        }
    }

    pub fn security_level(&self) -> SecurityLevel {
        match self {
            Self::Maritime(vessel) => vessel.security_level,
            Self::Infrastructure(facility) => facility.security_level,
        }
    }

    /// Whether `id` names this target (MMSI or IMO for vessels, id for facilities)
    pub fn matches_id(&self, id: &str) -> bool {
        match self {
            Self::Maritime(vessel) => vessel.mmsi == id || vessel.imo == id,
            Self::Infrastructure(facility) => facility.id == id,
        }
    }
}

impl From<Vessel> for Target {
    fn from(vessel: Vessel) -> Self {
        Self::Maritime(vessel)
    }
}

impl From<Facility> for Target {
    fn from(facility: Facility) -> Self {
        Self::Infrastructure(facility)
    }
}
