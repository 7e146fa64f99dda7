// src/scrape/shots.rs
use log::{debug, warn};

use crate::config::HarvestOptions;
use crate::core::Transport;
use crate::model::{RawShot, ResultId, ShotRef};
use crate::specs::{self, result_data, session_lite};

use super::{recoverable, HarvestError};

/// Result ids of one session. Any failure short of an unusable client reads
/// as an empty session.
pub fn resolve_shot_ids(
    client: &dyn Transport,
    opts: &HarvestOptions,
    session_id: &str,
) -> Result<Vec<ResultId>, HarvestError> {
    let form = session_lite::lite_form(&opts.user_id, session_id);
    let body = match specs::post(client, &form) {
        Ok(body) => body,
        Err(e) => {
            let e = recoverable(e)?;
            warn!("GetSessionLite for session {session_id} failed: {e}");
            return Ok(Vec::new());
        }
    };

    match session_lite::parse_result_ids(&body) {
        Ok(ids) => Ok(ids),
        Err(e) => {
            warn!("GetSessionLite parse error for session {session_id}: {e}");
            Ok(Vec::new())
        }
    }
}

/// Full shot payloads for `result_ids`: one bulk request first, one request
/// per id only when the bulk answer is unusable.
///
/// A non-empty bulk answer is trusted wholesale. Returned ids are not checked
/// against `result_ids`, so the padding may pull in extra entries.
pub fn fetch_shots(
    client: &dyn Transport,
    opts: &HarvestOptions,
    session_id: &str,
    result_ids: &[ResultId],
) -> Result<Vec<RawShot>, HarvestError> {
    let Some(first) = result_ids.first() else {
        return Ok(Vec::new());
    };

    let start = ShotRef { session_id, result_id: first };
    if let Some(shots) = fetch_bulk(client, opts, start, result_ids.len() + opts.bulk_padding)? {
        if shots.len() != result_ids.len() {
            debug!(
                "Bulk fetch for session {session_id}: {} shots for {} ids, accepted as-is",
                shots.len(),
                result_ids.len()
            );
        }
        return Ok(shots);
    }

    fetch_each(client, opts, session_id, result_ids)
}

/// `Ok(None)` when the bulk path is unusable for this session.
fn fetch_bulk(
    client: &dyn Transport,
    opts: &HarvestOptions,
    start: ShotRef<'_>,
    limit: usize,
) -> Result<Option<Vec<RawShot>>, HarvestError> {
    let session_id = start.session_id;
    let form = result_data::data_form(&opts.user_id, start, limit);

    let body = match specs::post(client, &form) {
        Ok(body) => body,
        Err(e) => {
            let e = recoverable(e)?;
            warn!("Bulk GetSessionResultData for session {session_id} failed: {e}. Falling back to per-shot calls.");
            return Ok(None);
        }
    };

    match result_data::parse_shots(&body) {
        Ok(shots) if !shots.is_empty() => Ok(Some(shots)),
        Ok(_) => {
            warn!("Bulk GetSessionResultData for session {session_id} returned no shots. Falling back to per-shot calls.");
            Ok(None)
        }
        Err(e) => {
            warn!("Bulk GetSessionResultData for session {session_id} unreadable: {e}. Falling back to per-shot calls.");
            Ok(None)
        }
    }
}

fn fetch_each(
    client: &dyn Transport,
    opts: &HarvestOptions,
    session_id: &str,
    result_ids: &[ResultId],
) -> Result<Vec<RawShot>, HarvestError> {
    let mut shots = Vec::with_capacity(result_ids.len());

    for (i, rid) in result_ids.iter().enumerate() {
        if i > 0 {
            opts.rate.pause(opts.rate.item);
        }

        let form = result_data::data_form(&opts.user_id, ShotRef { session_id, result_id: rid }, 1);
        let body = match specs::post(client, &form) {
            Ok(body) => body,
            Err(e) => {
                let e = recoverable(e)?;
                warn!("Shot {rid} error: {e}");
                continue;
            }
        };

        match result_data::parse_single(&body) {
            Ok(Some(shot)) => shots.push(shot),
            Ok(None) => warn!("Shot {rid}: empty answer"),
            Err(e) => warn!("Shot {rid} error: {e}"),
        }
    }

    Ok(shots)
}
