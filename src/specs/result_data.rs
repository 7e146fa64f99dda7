// src/specs/result_data.rs
use crate::core::response::{self, DecodeError};
use crate::model::{RawShot, ShotRef};

use super::Form;

pub const METHOD: &str = "GetSessionResultData";

/// Request `limit` shots starting at `start`.
pub fn data_form(user_id: &str, start: ShotRef<'_>, limit: usize) -> Form {
    vec![
        ("method", s!(METHOD)),
        ("UserID", s!(user_id)),
        ("SessionID", s!(start.session_id)),
        ("StartResultID", s!(start.result_id.as_str())),
        ("Limit", limit.to_string()),
        ("ForcedSurfaceType", s!()),
        ("ShareID", s!()),
    ]
}

/// All shots in a bulk answer, in the order returned.
pub fn parse_shots(body: &str) -> Result<Vec<RawShot>, DecodeError> {
    Ok(response::decode_array(body)?.into_iter().map(RawShot::new).collect())
}

/// The single shot of a `Limit=1` answer. `Ok(None)` for an empty array.
pub fn parse_single(body: &str) -> Result<Option<RawShot>, DecodeError> {
    Ok(response::decode_array(body)?.into_iter().next().map(RawShot::new))
}
