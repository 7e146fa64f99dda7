// src/progress.rs
use crate::model::Session;

/// Why a session contributed no shots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The session resolved to zero result ids.
    NoResultIds,
    /// Result ids were found but neither bulk nor fallback returned a shot.
    NoShots,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::NoResultIds => "0 results, skipping",
            SkipReason::NoShots => "0 shots returned, skipping",
        }
    }
}

/// Lightweight progress reporting for the long-running harvest.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the session catalog is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A session (0-based `index`) produced `shots` shots.
    fn session_done(&mut self, _index: usize, _session: &Session, _shots: usize) {}

    fn session_skipped(&mut self, _index: usize, _session: &Session, _reason: SkipReason) {}

    /// Called at the end of a completed harvest.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
