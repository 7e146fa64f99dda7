// src/config/options.rs
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;

/// Fixed pauses inserted after each unit of remote work.
///
/// The harvest never adapts these; they only bound the request rate. Every
/// pause goes through `sleep`, which is `thread::sleep` unless replaced.
#[derive(Clone, Copy, Debug)]
pub struct RateLimit {
    /// After each session listing page.
    pub page: Duration,
    /// After a session that produced shots.
    pub session: Duration,
    /// After a session that was skipped.
    pub skipped_session: Duration,
    /// Between per-shot fallback requests.
    pub item: Duration,
    pub sleep: fn(Duration),
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            page: Duration::from_millis(PAGE_PAUSE_MS),
            session: Duration::from_millis(SESSION_PAUSE_MS),
            skipped_session: Duration::from_millis(SKIPPED_SESSION_PAUSE_MS),
            item: Duration::from_millis(ITEM_PAUSE_MS),
            sleep: thread::sleep,
        }
    }
}

impl RateLimit {
    /// No pauses at all. Used by tests and dry runs against fixtures.
    pub fn none() -> Self {
        Self {
            page: Duration::ZERO,
            session: Duration::ZERO,
            skipped_session: Duration::ZERO,
            item: Duration::ZERO,
            sleep: thread::sleep,
        }
    }

    /// Same durations, paused through `sleep` instead of the thread clock.
    pub fn with_sleep(self, sleep: fn(Duration)) -> Self {
        Self { sleep, ..self }
    }

    pub fn pause(&self, d: Duration) {
        if !d.is_zero() {
            (self.sleep)(d);
        }
    }
}

/// Date window passed to the session listing. Wide by default, i.e. "all time".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DateWindow {
    fn default() -> Self {
        let parse = |s: &str| NaiveDate::parse_from_str(s, WIRE_DATE_FMT).unwrap_or_default();
        Self { start: parse(WINDOW_START), end: parse(WINDOW_END) }
    }
}

impl DateWindow {
    pub fn start_param(&self) -> String {
        self.start.format(WIRE_DATE_FMT).to_string()
    }
    pub fn end_param(&self) -> String {
        self.end.format(WIRE_DATE_FMT).to_string()
    }
}

#[derive(Clone, Debug)]
pub struct HarvestOptions {
    /// Account id used by the per-session operations.
    pub user_id: String,
    /// Player id used by the session listing. Usually the same as `user_id`.
    pub player_id: String,
    pub window: DateWindow,
    pub page_size: usize,
    /// Extra results requested on top of the resolved id count in the bulk fetch.
    pub bulk_padding: usize,
    pub rate: RateLimit,
}

impl HarvestOptions {
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self {
            player_id: user_id.clone(),
            user_id,
            window: DateWindow::default(),
            page_size: PAGE_SIZE,
            bulk_padding: BULK_PADDING,
            rate: RateLimit::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Pretty-print the JSON outputs.
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR), pretty: true }
    }
}

impl ExportOptions {
    pub fn sessions_path(&self) -> PathBuf {
        self.out_dir.join(SESSIONS_FILE)
    }
    pub fn raw_path(&self) -> PathBuf {
        self.out_dir.join(RAW_SHOTS_FILE)
    }
    pub fn flat_path(&self) -> PathBuf {
        self.out_dir.join(FLAT_SHOTS_FILE)
    }
}
