//! Shared response parsing utilities for LLM outputs
//!
//! Models asked for JSON often wrap it in markdown fences or narrate around
//! it. These helpers locate the JSON payload regardless.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::LlmError;

/// Utilities for extracting and parsing JSON from LLM responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a JSON value from an LLM response.
    ///
    /// Strategy order:
    /// 1) The full trimmed content.
    /// 2) A fenced JSON code block (```json ... ```).
    /// 3) Any fenced code block (``` ... ```).
    /// 4) The first valid JSON object/array found in the text.
    pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, LlmError> {
        let trimmed = content.trim();
        if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
            return Ok(parsed);
        }

        let candidates = [
            Self::extract_fenced_json(trimmed),
            Self::extract_any_fenced_code(trimmed),
            Self::extract_first_json_value(trimmed),
        ];

        candidates
            .into_iter()
            .flatten()
            .find_map(|json| serde_json::from_str::<T>(&json).ok())
            .ok_or_else(|| {
                LlmError::InvalidResponse(
                    "Failed to extract valid JSON from LLM response".to_string(),
                )
            })
    }

    /// Parse the first JSON object in the response.
    ///
    /// A top-level array holding a single object is unwrapped.
    pub fn parse_object(content: &str) -> Result<Map<String, Value>, LlmError> {
        match Self::parse_json::<Value>(content)? {
            Value::Object(map) => Ok(map),
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::Object(map)) => Ok(map),
                _ => Err(LlmError::InvalidResponse(
                    "Expected a JSON object, found an array".to_string(),
                )),
            },
            other => Err(LlmError::InvalidResponse(format!(
                "Expected a JSON object, found {}",
                other
            ))),
        }
    }

    /// Extract a ```json fenced code block.
    pub fn extract_fenced_json(content: &str) -> Option<String> {
        Self::extract_fenced_block(content, Some("json"))
    }

    /// Extract any fenced code block.
    pub fn extract_any_fenced_code(content: &str) -> Option<String> {
        Self::extract_fenced_block(content, None)
    }

    /// Extract the first valid JSON value (object or array) from text.
    pub fn extract_first_json_value(content: &str) -> Option<String> {
        content
            .char_indices()
            .filter(|(_, ch)| *ch == '{' || *ch == '[')
            .find_map(|(idx, _)| {
                let candidate = &content[idx..];
                let mut de =
                    serde_json::Deserializer::from_str(candidate).into_iter::<Value>();
                match de.next() {
                    Some(Ok(_)) => {
                        let end = de.byte_offset();
                        (end > 0 && end <= candidate.len()).then(|| candidate[..end].to_string())
                    }
                    _ => None,
                }
            })
    }

    fn extract_fenced_block(content: &str, language: Option<&str>) -> Option<String> {
        let fence = "```";
        let mut search = content;

        loop {
            let start = search.find(fence)?;
            let after_start = &search[start + fence.len()..];

            let line_end = after_start.find('\n')?;
            let lang_tag = after_start[..line_end].trim();
            let rest = &after_start[line_end + 1..];

            if let Some(expected) = language
                && !lang_tag.eq_ignore_ascii_case(expected)
            {
                search = after_start;
                continue;
            }

            let end = rest.find(fence)?;
            return Some(rest[..end].trim().to_string());
        }
    }
}
