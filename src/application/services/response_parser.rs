use serde_json::{Map, Value};

use crate::domain::{
    ClassificationProfile, Component, ComponentLocation, ReusePotential,
};

pub const DEFAULT_TITLE: &str = "Untitled Component";
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, thiserror::Error)]
pub enum ResponseParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Returns the body of the first fenced block (preferring a `json`-tagged
/// one), or the trimmed response when it has no fence.
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();

    let after_fence = trimmed
        .split_once(JSON_FENCE)
        .or_else(|| trimmed.split_once(FENCE))
        .map(|(_, rest)| rest);

    match after_fence {
        Some(rest) => rest.split_once(FENCE).map_or(rest, |(body, _)| body).trim(),
        None => trimmed,
    }
}

/// Parses an oracle response into components, coercing every record onto
/// the profile's taxonomy. Array elements that are not objects are skipped.
pub fn parse_components(
    response: &str,
    profile: &ClassificationProfile,
) -> Result<Vec<Component>, ResponseParseError> {
    let payload = strip_code_fence(response);
    let value: Value = serde_json::from_str(payload)?;

    let records = match value {
        Value::Array(records) => records,
        other => return Err(ResponseParseError::NotAnArray(json_kind(&other))),
    };

    let components = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record {
            Value::Object(fields) => Some(coerce_component(&fields, profile)),
            other => {
                tracing::warn!(index, kind = json_kind(&other), "Skipping non-object record");
                None
            }
        })
        .collect();

    Ok(components)
}

pub fn coerce_component(fields: &Map<String, Value>, profile: &ClassificationProfile) -> Component {
    let component_type = profile.resolve_type(fields.get("type").and_then(Value::as_str));

    Component {
        component_type,
        title: string_field(fields, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        text: string_field(fields, "text").unwrap_or_default(),
        confidence: coerce_confidence(fields.get("confidence")),
        reuse_potential: fields
            .get("reuse_potential")
            .and_then(Value::as_str)
            .and_then(ReusePotential::parse)
            .unwrap_or_default(),
        rationale: string_field(fields, "rationale").unwrap_or_default(),
        location: coerce_location(fields.get("location")),
    }
}

/// Numbers and numeric strings are accepted; anything else falls back to the
/// default. The result is clamped to `[0, 1]`.
pub fn coerce_confidence(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_CONFIDENCE)
}

fn coerce_location(value: Option<&Value>) -> ComponentLocation {
    let Some(Value::Object(location)) = value else {
        return ComponentLocation::default();
    };

    let page = match location.get("page") {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .filter(|p| *p > 0)
    .and_then(|p| u32::try_from(p).ok());

    let section = match location.get("section") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    ComponentLocation { page, section }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
