use redteam_core::domain::{Complexity, Scenario, SystemDetails, Target};
use serde::Serialize;
use serde_json::{Value, json};

pub const SCENARIO_SYSTEM_PROMPT: &str = "You are an expert red team security analyst tasked with identifying realistic vulnerabilities in systems.";

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a cybersecurity expert analyzing vulnerabilities and providing actionable recommendations.";

pub const ATTACK_SCENARIO_PROMPT: &str = r#"As a red team security expert, create a realistic attack scenario targeting the following system:

Target Information:
{target}

Complexity level: {complexity}

Your response should include:
1. Attack vector and initial access method
2. Step-by-step attack progression
3. Potential impact if successful
4. Indicators of compromise
5. Required attacker resources and skills

Format your response as a structured JSON object with these fields:
{
    "attack_vector": "string",
    "steps": ["string", "..."],
    "impact": "Low | Medium | High | Critical",
    "indicators": ["string", "..."],
    "attacker_profile": { "resources": "string", "skills": "string" }
}
"#;

pub const VULNERABILITY_ANALYSIS_PROMPT: &str = r#"Analyze the following attack scenario against the specified system:

Attack Scenario:
{scenario}

System Details:
{system_details}

Provide a detailed analysis including:
1. Vulnerability assessment (severity, exploitability, impact)
2. Technical explanation of how the vulnerability works
3. Specific defensive measures to mitigate this vulnerability
4. Long-term security improvements to prevent similar attacks
5. Detection methods to identify this attack in progress

Format your response as a structured JSON object with these fields:
{
    "severity": "Low | Medium | High | Critical",
    "explanation": "string",
    "mitigations": ["string", "..."],
    "long_term_fixes": ["string", "..."],
    "detection_methods": ["string", "..."]
}
"#;

pub const HISTORY_ANALYSIS_PROMPT: &str = r#"Review the following {count} red team simulation results:

{results}

Write a report with exactly these headings, each on its own line:
Key Findings
Attack Patterns
Critical Vulnerabilities
Defense Recommendations
Risk Assessment

Under each heading, write short paragraphs and list individual points on lines starting with "- ".
"#;

pub struct PromptBuilder;

impl PromptBuilder {
    /// One `- key: value` line per top-level field of a JSON object.
    ///
    /// Strings are written bare; everything else as compact JSON.
    pub fn format_attributes(value: &Value) -> String {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| format!("- {}: {}", key, Self::display_value(value)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => Self::display_value(other),
        }
    }

    fn display_value(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn to_attributes<T: Serialize>(item: &T) -> String {
        serde_json::to_value(item)
            .map(|value| Self::format_attributes(&value))
            .unwrap_or_default()
    }

    pub fn build_scenario_prompt(target: &Target, complexity: Complexity) -> String {
        ATTACK_SCENARIO_PROMPT
            .replace("{target}", &Self::to_attributes(target))
            .replace("{complexity}", &complexity.to_string())
    }

    pub fn build_vulnerability_prompt(scenario: &Scenario, details: &SystemDetails) -> String {
        let summary = json!({
            "target": scenario.target.display_name(),
            "target_kind": scenario.target.kind(),
            "complexity": scenario.complexity,
            "attack_vector": scenario.plan.attack_vector,
            "steps": scenario.plan.steps,
            "impact": scenario.plan.impact,
            "indicators": scenario.plan.indicators,
            "attacker_profile": scenario.plan.attacker_profile,
            "simulation_results": scenario.simulation_results,
            "overall_success": scenario.overall_success,
        });

        VULNERABILITY_ANALYSIS_PROMPT
            .replace("{scenario}", &Self::format_attributes(&summary))
            .replace("{system_details}", &Self::to_attributes(details))
    }

    pub fn build_history_prompt(scenarios: &[Scenario]) -> String {
        let results = scenarios
            .iter()
            .enumerate()
            .map(|(idx, scenario)| {
                let executed = scenario.simulation_results.len();
                let succeeded = scenario
                    .simulation_results
                    .iter()
                    .filter(|r| r.success)
                    .count();
                let severity = scenario
                    .vulnerability_analysis
                    .as_ref()
                    .map(|a| a.severity.as_str())
                    .unwrap_or("not analyzed");

                format!(
                    "Simulation {}:\n- target: {} ({})\n- complexity: {}\n- attack_vector: {}\n- steps executed: {}/{} ({} succeeded)\n- overall_success: {}\n- severity: {}",
                    idx + 1,
                    scenario.target.display_name(),
                    scenario.target.kind(),
                    scenario.complexity,
                    scenario.plan.attack_vector,
                    executed,
                    scenario.plan.steps.len(),
                    succeeded,
                    scenario.overall_success,
                    severity
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        HISTORY_ANALYSIS_PROMPT
            .replace("{count}", &scenarios.len().to_string())
            .replace("{results}", &results)
    }
}
