// src/config/consts.rs

// Net config
pub const ENDPOINT: &str =
    "https://myflightscope.com/wp-content/plugins/fs-soap-frame/public/index.php";
pub const ORIGIN: &str = "https://myflightscope.com";
pub const REFERER: &str = "https://myflightscope.com/";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 60;

// Credentials
pub const ENV_COOKIE: &str = "FLIGHTSCOPE_COOKIE";
pub const ENV_USER_ID: &str = "FLIGHTSCOPE_USER_ID";
pub const ENV_PLAYER_ID: &str = "FLIGHTSCOPE_PLAYER_ID";

// Harvest
pub const PAGE_SIZE: usize = 100;
pub const BULK_PADDING: usize = 10;
pub const WINDOW_START: &str = "2012-01-01";
pub const WINDOW_END: &str = "2030-12-31";
pub const WIRE_DATE_FMT: &str = "%Y-%m-%d";

// Pacing, be polite
pub const PAGE_PAUSE_MS: u64 = 500;
pub const SESSION_PAUSE_MS: u64 = 300;
pub const SKIPPED_SESSION_PAUSE_MS: u64 = 200;
pub const ITEM_PAUSE_MS: u64 = 100;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "harvest.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SESSIONS_FILE: &str = "sessions.json";
pub const RAW_SHOTS_FILE: &str = "shots_all.json";
pub const FLAT_SHOTS_FILE: &str = "shots_all.csv";
