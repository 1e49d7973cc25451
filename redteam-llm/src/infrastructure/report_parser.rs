//! Splitting free-text history reviews into report sections

use redteam_core::domain::{HistoryReport, ReportSection};

/// Turns a model reply into a [`HistoryReport`]
pub trait ReportParser: Send + Sync {
    fn parse(&self, text: &str) -> HistoryReport;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    KeyFindings,
    AttackPatterns,
    CriticalVulnerabilities,
    DefenseRecommendations,
    RiskAssessment,
}

/// Heading markers, matched as case-sensitive substrings in this order
const HEADINGS: [(&str, Section); 5] = [
    ("Key Findings", Section::KeyFindings),
    ("Attack Pattern", Section::AttackPatterns),
    ("Critical Vulnerabilities", Section::CriticalVulnerabilities),
    ("Defense Recommendations", Section::DefenseRecommendations),
    ("Risk Assessment", Section::RiskAssessment),
];

/// Line-oriented splitter keyed on heading substrings.
///
/// - A line containing a heading marker switches the current section and is
///   not kept.
/// - Lines before the first heading are dropped.
/// - A line starting with `-` goes to the section's items, dash stripped.
/// - Any other non-empty line is appended to the section's text.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadingSectionParser;

impl HeadingSectionParser {
    fn heading_of(line: &str) -> Option<Section> {
        HEADINGS
            .iter()
            .find(|(marker, _)| line.contains(marker))
            .map(|(_, section)| *section)
    }

    fn section_mut(report: &mut HistoryReport, section: Section) -> &mut ReportSection {
        match section {
            Section::KeyFindings => &mut report.key_findings,
            Section::AttackPatterns => &mut report.attack_patterns,
            Section::CriticalVulnerabilities => &mut report.critical_vulnerabilities,
            Section::DefenseRecommendations => &mut report.defense_recommendations,
            Section::RiskAssessment => &mut report.risk_assessment,
        }
    }
}

impl ReportParser for HeadingSectionParser {
    fn parse(&self, text: &str) -> HistoryReport {
        let mut report = HistoryReport {
            raw_response: text.to_string(),
            ..HistoryReport::default()
        };
        let mut current: Option<Section> = None;

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            if let Some(section) = Self::heading_of(line) {
                current = Some(section);
                continue;
            }

            let Some(section) = current else {
                continue;
            };
            let target = Self::section_mut(&mut report, section);

            if let Some(item) = line.strip_prefix('-') {
                target.items.push(item.trim().to_string());
            } else {
                if !target.text.is_empty() {
                    target.text.push('\n');
                }
                target.text.push_str(line);
            }
        }

        report
    }
}
