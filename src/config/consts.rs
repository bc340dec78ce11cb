// src/config/consts.rs

// Net config
pub const API_URL_ENV: &str = "TEACHERHUB_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8081";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Refresh
pub const POLL_INTERVAL_SECS: u64 = 10;

// Teachers page
pub const TEACHERS_PER_PAGE: usize = 12;

// Ranking/list sizes
pub const RANKING_LIMIT: usize = 20;
pub const WEEKLY_RANKING_LIMIT: usize = 30;
pub const RECENT_MENTIONS_LIMIT: usize = 10;
pub const HISTORY_DAYS: u32 = 7;
pub const TREND_WEEKS: u32 = 8;

// Sentiment thresholds (score in -1.0..=1.0)
pub const SENTIMENT_POSITIVE_MIN: f64 = 0.2;
pub const SENTIMENT_NEGATIVE_MAX: f64 = -0.2;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "export";
