use std::time::Duration;

/// Debounce quiet period applied to query keystrokes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Caller-side ceiling on a single fetch.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Committed queries remembered for the search-history screen.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Per-screen tuning for a search session.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub debounce: Duration,
    pub page_size: usize,
    pub fetch_timeout: Duration,
    pub history_limit: usize,
    /// Fetch page 1 immediately on spawn, the way the map screens show
    /// nearby results before the user types anything.
    pub fetch_on_spawn: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            history_limit: DEFAULT_HISTORY_LIMIT,
            fetch_on_spawn: false,
        }
    }
}
