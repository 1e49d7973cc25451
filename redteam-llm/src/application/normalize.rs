//! Lenient coercion of model-authored JSON into fixed fields
//!
//! Models rename keys ("Attack Vector", "attack_steps"), nest values in
//! objects, or return prose where a list was requested. Everything here
//! returns `None` rather than failing so callers can substitute placeholders.

use serde_json::{Map, Value};

/// Keys tried, in order, when an object stands in for a single string
const DESCRIPTIVE_KEYS: [&str; 9] = [
    "description",
    "step",
    "action",
    "name",
    "method",
    "summary",
    "text",
    "value",
    "title",
];

/// Lower-case keys with spaces and hyphens folded to underscores
pub fn normalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (normalize_key(&key), value))
        .collect()
}

pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// First present value among `keys`
pub fn pick<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key)).filter(|v| !v.is_null())
}

/// Best-effort single line of text from any JSON value
pub fn to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.trim().to_string(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(to_text)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(map) => {
            let map = normalize_keys(map.clone());
            match pick(&map, &DESCRIPTIVE_KEYS).and_then(to_text) {
                Some(text) => text,
                None => value.to_string(),
            }
        }
    };

    (!text.is_empty()).then_some(text)
}

/// Best-effort list of strings from any JSON value.
///
/// A multi-line string is split into lines with bullets and numbering removed.
pub fn to_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Null => return None,
        Value::Array(items) => items.iter().filter_map(to_text).collect(),
        Value::String(text) => text
            .lines()
            .map(strip_bullet)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Object(map) => map.values().filter_map(to_text).collect(),
        other => to_text(other).into_iter().collect(),
    };

    (!items.is_empty()).then_some(items)
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .unwrap_or(line);

    // "1. " / "12) "
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return stripped.trim();
        }
    }
    line
}
