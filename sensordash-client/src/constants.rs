/// Event-log table keeps this many rows; the oldest falls off the tail.
pub const LOG_CAPACITY: usize = 100;

/// Live chart keeps this many points per series.
pub const CHART_CAPACITY: usize = 50;

/// Reserved string a sensor reports when a read failed. Distinct from "no
/// value" (null/absent), which renders as [`VALUE_FALLBACK`].
pub const ERROR_SENTINEL: &str = "ERR";

/// Placeholder for blank or missing fields.
pub const VALUE_FALLBACK: &str = "N/A";

pub const LIVE_POLL_INTERVAL_MS: u32 = 2_000;
pub const LOG_SYNC_INTERVAL_MS: u32 = 10_000;

pub const LIVE_DATA_PATH: &str = "/live_data";
pub const RECENT_ENTRIES_PATH: &str = "/recent_entries";
pub const ALL_DATA_PATH: &str = "/all_data";
pub const CLEAR_LOG_PATH: &str = "/clear_log";
