// src/config/consts.rs

// Net config
pub const NEWS_URL: &str = "https://news.naver.com/";
pub const HEADLINE_SELECTOR: &str = ".cjs_t";
pub const HEADLINE_LIMIT: usize = 10;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("deskkit/", env!("CARGO_PKG_VERSION"));

// Local store (logs only; nothing else is persisted)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info,deskkit=debug";

// GUI
pub const WINDOW_TITLE: &str = "Simple Calculator";
pub const WINDOW_W: f32 = 260.0;
pub const WINDOW_H: f32 = 300.0;
