//! Constants shared by the search input and suggestion pipeline.

/// Combined suggestion list (recents + catalog matches) is cut at this length.
pub const SUGGESTION_LIMIT: usize = 8;

/// Journal capacity. Oldest entries are evicted past this point.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// How many journal entries the empty-query shortcut panel shows.
pub const VISIBLE_RECENT_SHORTCUTS: usize = 3;

/// Storage key for the recent search journal.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Quiet period between the last keystroke and a suggestion lookup.
pub const DEBOUNCE_QUIET_MS: u32 = 300;

/// Artificial latency of the mocked suggestion/post endpoints.
pub const SIMULATED_LATENCY_MS: u32 = 300;
