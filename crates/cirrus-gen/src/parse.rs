//! Lenient extraction of a diagram draft from raw model output. Models
//! wrap JSON in prose or code fences often enough that we take the
//! outermost brace span instead of requiring clean JSON.

use serde::Deserialize;

use cirrus_core::RawEdge;

use crate::GenerateError;

/// The shape the model is asked to emit. Every field is defaulted so a
/// partially conforming response still yields a diagram.
#[derive(Debug, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

pub fn parse_draft(raw: &str) -> Result<Draft, GenerateError> {
    let json = extract_json_object(raw)
        .ok_or_else(|| GenerateError::MalformedResponse("no JSON object found".to_string()))?;
    serde_json::from_str(json).map_err(|e| GenerateError::MalformedResponse(e.to_string()))
}
