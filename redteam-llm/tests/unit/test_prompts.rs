//! Unit tests for prompt templates

use redteam_core::domain::{Complexity, Target};
use redteam_llm::prompts::{ATTACK_SCENARIO_PROMPT, PromptBuilder};
use serde_json::json;

#[test]
fn test_format_attributes() {
    let formatted = PromptBuilder::format_attributes(&json!({
        "name": "Hoover Dam",
        "systems": ["SCADA", "IT Network"],
        "size": "Large"
    }));

    assert!(formatted.contains("- name: Hoover Dam"));
    assert!(formatted.contains("- systems: [\"SCADA\",\"IT Network\"]"));
    assert_eq!(formatted.lines().count(), 3);
}

#[test]
fn test_scenario_prompt_for_facility() {
    let target = Target::from_value(json!({
        "id": "FAC10001",
        "name": "Hoover Dam",
        "facility_type": "Power Plant"
    }))
    .unwrap();

    let prompt = PromptBuilder::build_scenario_prompt(&target, Complexity::High);

    assert!(prompt.contains("- kind: infrastructure"));
    assert!(prompt.contains("- name: Hoover Dam"));
    assert!(prompt.contains("Complexity level: high"));
    assert!(!prompt.contains("{target}"));
    assert!(!prompt.contains("{complexity}"));
}

#[test]
fn test_scenario_template_lists_required_sections() {
    for section in [
        "Attack vector and initial access method",
        "Step-by-step attack progression",
        "Potential impact if successful",
        "Indicators of compromise",
        "Required attacker resources and skills",
    ] {
        assert!(ATTACK_SCENARIO_PROMPT.contains(section), "missing {section}");
    }
}
