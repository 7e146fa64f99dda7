// src/scrape/mod.rs
//
// The harvesting pipeline: enumerate sessions, resolve each session's result
// ids, fetch the shots, flatten. Strictly sequential; one request in flight.

use thiserror::Error;

use crate::core::TransportError;

mod harvest;
mod sessions;
mod shots;

pub use harvest::{harvest, Harvest};
pub use sessions::list_sessions;
pub use shots::{fetch_shots, resolve_shot_ids};

/// Conditions that abort a harvest. Anything session- or shot-scoped degrades
/// to an empty result and a log line instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Credentials were rejected; no further request can succeed.
    #[error("remote client is unusable: {0}")]
    Client(#[source] TransportError),
    /// The session catalog answered with an error status.
    #[error("session listing failed: {0}")]
    Listing(#[source] TransportError),
}

/// Hand back a transport error the caller may recover from, or escalate it.
fn recoverable(e: TransportError) -> Result<TransportError, HarvestError> {
    if e.is_fatal() { Err(HarvestError::Client(e)) } else { Ok(e) }
}
