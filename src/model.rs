// src/model.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded practice outing, as listed by the remote catalog.
/// Fields are kept as the remote formats them; missing ones are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "sessionID")]
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "createDate")]
    pub create_date: String,
    #[serde(rename = "appVersion")]
    pub app_version: String,
    pub location: String,
    #[serde(rename = "sessionTypeID")]
    pub type_id: String,
}

impl Session {
    /// `YYYY-MM-DD` part of the creation timestamp, for display.
    pub fn date(&self) -> &str {
        self.create_date.get(..10).unwrap_or(&self.create_date)
    }
}

/// Remote-assigned key of one shot. Opaque: numbers and strings are both
/// carried in their textual form and sent back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn from_json(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A shot as addressed on the wire: owning session plus result id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotRef<'a> {
    pub session_id: &'a str,
    pub result_id: &'a ResultId,
}

/// One shot exactly as the remote returned it. Never mutated after decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawShot(Value);

impl RawShot {
    pub fn new(v: Value) -> Self {
        Self(v)
    }

    /// Top-level field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nested measurement group. Absent, null or non-object groups read as empty.
    pub fn group(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }
}
