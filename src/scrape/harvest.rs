// src/scrape/harvest.rs
use log::info;

use crate::config::HarvestOptions;
use crate::core::Transport;
use crate::flatten::{flatten, FlatRecord};
use crate::model::{RawShot, Session};
use crate::progress::{Progress, SkipReason};

use super::{fetch_shots, list_sessions, resolve_shot_ids, HarvestError};

/// Everything one run produced, in arrival order.
#[derive(Debug, Default)]
pub struct Harvest {
    pub sessions: Vec<Session>,
    pub raw: Vec<RawShot>,
    pub flat: Vec<FlatRecord>,
    /// Sessions that contributed no shots.
    pub skipped: usize,
}

impl Harvest {
    pub fn shot_count(&self) -> usize {
        self.raw.len()
    }

    pub fn harvested_sessions(&self) -> usize {
        self.sessions.len().saturating_sub(self.skipped)
    }
}

enum Outcome {
    Shots(Vec<RawShot>),
    Skipped(SkipReason),
}

/// Run the whole pipeline against an authenticated client.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn harvest(
    client: &dyn Transport,
    opts: &HarvestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Harvest, HarvestError> {
    let sessions = list_sessions(client, opts)?;
    info!("{} sessions found", sessions.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sessions.len());
    }

    let mut out = Harvest::default();

    for (i, session) in sessions.iter().enumerate() {
        match collect_session(client, opts, session)? {
            Outcome::Shots(shots) => {
                info!("Session {}: {} shots", session.id, shots.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.session_done(i, session, shots.len());
                }
                out.flat.extend(shots.iter().map(|shot| flatten(shot, session)));
                out.raw.extend(shots);
                opts.rate.pause(opts.rate.session);
            }
            Outcome::Skipped(reason) => {
                info!("Session {}: {}", session.id, reason.describe());
                out.skipped += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.session_skipped(i, session, reason);
                }
                opts.rate.pause(opts.rate.skipped_session);
            }
        }
    }

    out.sessions = sessions;
    info!(
        "Total shots: {} | sessions skipped: {}",
        out.shot_count(),
        out.skipped
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

/// Per-session boundary: only an unusable client gets past this point.
fn collect_session(
    client: &dyn Transport,
    opts: &HarvestOptions,
    session: &Session,
) -> Result<Outcome, HarvestError> {
    let ids = resolve_shot_ids(client, opts, &session.id)?;
    if ids.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::NoResultIds));
    }

    let shots = fetch_shots(client, opts, &session.id, &ids)?;
    if shots.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::NoShots));
    }
    Ok(Outcome::Shots(shots))
}
