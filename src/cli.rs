// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::builder::TypedValueParser;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use log::{error, LevelFilter};

use crate::config::consts::*;
use crate::config::credentials::resolve_cookie;
use crate::config::{DateWindow, ExportOptions, HarvestOptions, RateLimit};
use crate::core::UreqClient;
use crate::model::Session;
use crate::progress::{Progress, SkipReason};
use crate::scrape::HarvestError;
use crate::{file, logging, scrape};

#[derive(Parser, Debug)]
#[command(name = "shot_harvest", version)]
#[command(about = "Download every session and shot from your launch monitor account")]
pub struct Args {
    /// Account id used for per-session requests
    #[arg(long, env = ENV_USER_ID)]
    pub user_id: String,

    /// Player id used for the session listing (defaults to the user id)
    #[arg(long, env = ENV_PLAYER_ID)]
    pub player_id: Option<String>,

    /// `Cookie` header of a logged-in browser session
    #[arg(long, env = ENV_COOKIE, hide_env_values = true)]
    pub cookie: Option<String>,

    /// File holding the cookie header, or a JSON cookie list from a browser
    #[arg(long)]
    pub cookie_file: Option<PathBuf>,

    #[arg(long, default_value = ENDPOINT)]
    pub endpoint: String,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// First day of the session window (YYYY-MM-DD)
    #[arg(long, default_value = WINDOW_START)]
    pub from: NaiveDate,

    /// Last day of the session window (YYYY-MM-DD)
    #[arg(long, default_value = WINDOW_END)]
    pub to: NaiveDate,

    /// Sessions per listing page
    #[arg(long, default_value_t = PAGE_SIZE,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub page_size: usize,

    #[arg(long, default_value_t = PAGE_PAUSE_MS)]
    pub page_delay_ms: u64,

    #[arg(long, default_value_t = SESSION_PAUSE_MS)]
    pub session_delay_ms: u64,

    #[arg(long, default_value_t = SKIPPED_SESSION_PAUSE_MS)]
    pub skipped_delay_ms: u64,

    /// Pause between per-shot fallback requests
    #[arg(long, default_value_t = ITEM_PAUSE_MS)]
    pub item_delay_ms: u64,

    /// Log file (default: .store/harvest.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn harvest_options(&self) -> HarvestOptions {
        let mut opts = HarvestOptions::new(self.user_id.clone());
        if let Some(pid) = self.player_id.as_ref().filter(|p| !p.is_empty()) {
            opts.player_id = pid.clone();
        }
        opts.window = DateWindow { start: self.from, end: self.to };
        opts.page_size = self.page_size;
        opts.rate = RateLimit {
            page: Duration::from_millis(self.page_delay_ms),
            session: Duration::from_millis(self.session_delay_ms),
            skipped_session: Duration::from_millis(self.skipped_delay_ms),
            item: Duration::from_millis(self.item_delay_ms),
            ..RateLimit::default()
        };
        opts
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { out_dir: self.out.clone(), ..ExportOptions::default() }
    }
}

/// Prints one line per session to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    fn head(&self, index: usize, session: &Session) {
        println!(
            "  [{:>3}/{}] {}  {}  {}",
            index + 1,
            self.total,
            session.id,
            session.date(),
            session.display_name
        );
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("      {total} sessions found.\n");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn session_done(&mut self, index: usize, session: &Session, shots: usize) {
        self.head(index, session);
        println!("           → {shots} shots");
    }
    fn session_skipped(&mut self, index: usize, session: &Session, reason: SkipReason) {
        self.head(index, session);
        println!("           → {}.", reason.describe());
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(STORE_DIR).join(LOG_FILE));
    logging::init(&log_path, level)
        .wrap_err_with(|| format!("cannot open log file {}", log_path.display()))?;

    let cookie = resolve_cookie(args.cookie.as_deref(), args.cookie_file.as_deref())?;
    let client = UreqClient::new(args.endpoint.clone(), cookie);
    let opts = args.harvest_options();
    let export = args.export_options();

    let mut progress = ConsoleProgress::default();
    progress.log("Fetching all sessions...");

    let harvest = match scrape::harvest(&client, &opts, Some(&mut progress as &mut dyn Progress)) {
        Ok(h) => h,
        Err(e) => {
            error!("Harvest aborted: {e}");
            let hint = match e {
                HarvestError::Client(_) => "harvest aborted; is the session cookie still valid?",
                HarvestError::Listing(_) => "harvest aborted while listing sessions",
            };
            return Err(e).wrap_err(hint);
        }
    };

    progress.log(&format!(
        "\n      Total shots: {}  |  Sessions skipped: {}\n",
        harvest.shot_count(),
        harvest.skipped
    ));

    let written = file::export(&harvest, &export).wrap_err("export failed")?;
    for path in &written {
        progress.log(&format!("      Saved {}", path.display()));
    }

    progress.log(&format!(
        "\nDone! {} shots across {} sessions.",
        harvest.shot_count(),
        harvest.harvested_sessions()
    ));
    Ok(())
}
