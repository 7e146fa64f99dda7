// src/specs/mod.rs
//! # Remote operation "specs"
//!
//! One module per remote operation. Each spec knows *which form fields* the
//! operation takes and *how its answer is shaped*:
//!
//! - `sessions` – `listSessionsWithScoreForPlayerAndFilter`, a paged XML catalog
//!   of `Session` elements.
//! - `session_lite` – `GetSessionLite`, JSON (optionally enveloped) whose
//!   `ResultsRange` lists the result ids of a session.
//! - `result_data` – `GetSessionResultData`, JSON (optionally enveloped) array of
//!   full shot payloads starting at a given result id.
//!
//! ## What does **not** live here
//! - Pacing, fallback and skip policy – that belongs to `scrape`.
//! - Transport and authentication – `core::net`.
//!
//! Specs are pure: they build forms and shape bodies, so they are testable
//! offline against captured responses.

use crate::core::{Transport, TransportError};

pub mod result_data;
pub mod session_lite;
pub mod sessions;

/// Form fields of one request, in wire order.
pub type Form = Vec<(&'static str, String)>;

/// Post a form through any transport.
pub fn post(client: &dyn Transport, form: &Form) -> Result<String, TransportError> {
    let pairs: Vec<(&str, &str)> = form.iter().map(|(k, v)| (*k, v.as_str())).collect();
    client.post_form(&pairs)
}
