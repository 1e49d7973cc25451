//! Vulnerability analysis records
//!
//! [`SystemDetails`] is the synthetic telemetry handed to the analyst model,
//! [`VulnerabilityAnalysis`] is its per-scenario verdict and [`HistoryReport`]
//! is the aggregate review of every recorded scenario.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Severity and remediation advice for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VulnerabilityAnalysis {
    pub severity: String,
    pub explanation: String,
    pub mitigations: Vec<String>,
    pub long_term_fixes: Vec<String>,
    pub detection_methods: Vec<String>,
}

/// Hardening class of a subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationClass {
    Default,
    Custom,
    Hardened,
}

impl ConfigurationClass {
    pub const ALL: [ConfigurationClass; 3] = [Self::Default, Self::Custom, Self::Hardened];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionLevel {
    None,
    Partial,
    Full,
}

impl EncryptionLevel {
    pub const ALL: [EncryptionLevel; 3] = [Self::None, Self::Partial, Self::Full];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AuthenticationMethod {
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "2fa")]
    TwoFactor,
    #[serde(rename = "mfa")]
    MultiFactor,
}

impl AuthenticationMethod {
    pub const ALL: [AuthenticationMethod; 3] = [Self::Basic, Self::TwoFactor, Self::MultiFactor];
}

/// Synthetic inventory entry for one named subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubsystemDetail {
    /// "<major>.<minor>"
    pub version: String,
    /// "P<n>"
    pub patch_level: String,
    pub configuration: ConfigurationClass,
    /// 0..=5
    pub known_vulnerabilities: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SecurityControls {
    pub firewall: bool,
    pub ids: bool,
    pub encryption: EncryptionLevel,
    pub authentication: AuthenticationMethod,
}

/// Telemetry synthesized for a target right before analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SystemDetails {
    pub detailed_systems: BTreeMap<String, SubsystemDetail>,
    pub security_controls: SecurityControls,
}

/// One headed section of a history report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ReportSection {
    /// Prose lines joined with newlines
    pub text: String,
    /// Dash-prefixed lines, dash removed
    pub items: Vec<String>,
}

impl ReportSection {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.items.is_empty()
    }
}

/// Aggregate analysis of the whole scenario history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct HistoryReport {
    pub key_findings: ReportSection,
    pub attack_patterns: ReportSection,
    pub critical_vulnerabilities: ReportSection,
    pub defense_recommendations: ReportSection,
    pub risk_assessment: ReportSection,
    /// The model reply the sections were split from
    pub raw_response: String,
    pub scenario_count: usize,
}
