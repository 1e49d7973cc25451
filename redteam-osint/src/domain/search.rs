//! Search over collected records

use redteam_core::domain::{Target, TargetKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which record sets a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Maritime,
    Infrastructure,
}

impl SearchScope {
    pub fn includes(&self, kind: TargetKind) -> bool {
        match self {
            Self::All => true,
            Self::Maritime => kind == TargetKind::Maritime,
            Self::Infrastructure => kind == TargetKind::Infrastructure,
        }
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "maritime" => Ok(Self::Maritime),
            "infrastructure" => Ok(Self::Infrastructure),
            other => Err(format!(
                "Invalid search type '{}': expected all, maritime or infrastructure",
                other
            )),
        }
    }
}

/// One matching record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub data: Target,
}

/// Case-insensitive substring match against the record's JSON form
pub fn matches_query<T: Serialize>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    serde_json::to_string(record)
        .map(|json| json.to_lowercase().contains(&needle))
        .unwrap_or(false)
}
