// src/specs/session_lite.rs
use serde_json::Value;

use crate::core::response::{self, DecodeError};
use crate::model::ResultId;

use super::Form;

pub const METHOD: &str = "GetSessionLite";

pub fn lite_form(user_id: &str, session_id: &str) -> Form {
    vec![
        ("method", s!(METHOD)),
        ("UserID", s!(user_id)),
        ("SessionID", s!(session_id)),
        ("ShareID", s!()),
    ]
}

/// Result ids listed under `ResultsRange`, in order.
///
/// A missing `ResultsRange` means an empty session. An entry without a usable
/// `ResultID` fails the whole decode rather than yielding a partial list.
pub fn parse_result_ids(body: &str) -> Result<Vec<ResultId>, DecodeError> {
    let doc = response::decode(body)?;
    let Value::Object(top) = &doc else {
        return Err(DecodeError::Shape { expected: "object", got: response::kind(&doc) });
    };

    let range = match top.get("ResultsRange") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DecodeError::Shape { expected: "array", got: response::kind(other) });
        }
    };

    range
        .iter()
        .map(|entry| {
            entry
                .get("ResultID")
                .and_then(ResultId::from_json)
                .ok_or(DecodeError::Shape { expected: "ResultID", got: response::kind(entry) })
        })
        .collect()
}
