// src/core/response.rs
//
// The JSON-speaking operations answer with a JSON payload that is usually
// wrapped in a literal `<Response>…</Response>` envelope, and sometimes not.
// Every call site goes through `decode` so the two shapes never fork.

use serde_json::Value;
use thiserror::Error;

use super::xml::strip_prolog;

const OPEN: &str = "<Response>";
const CLOSE: &str = "</Response>";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty response body")]
    Empty,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected}, got {got}")]
    Shape { expected: &'static str, got: &'static str },
}

/// Unwrap the optional envelope and parse the JSON inside.
pub fn decode(body: &str) -> Result<Value, DecodeError> {
    let text = unwrap_envelope(body);
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

/// Decode and require a JSON array.
pub fn decode_array(body: &str) -> Result<Vec<Value>, DecodeError> {
    match decode(body)? {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::Shape { expected: "array", got: kind(&other) }),
    }
}

fn unwrap_envelope(body: &str) -> &str {
    let text = strip_prolog(body);
    match text.strip_prefix(OPEN).and_then(|rest| rest.strip_suffix(CLOSE)) {
        Some(inner) => inner.trim(),
        None => text,
    }
}

pub fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
