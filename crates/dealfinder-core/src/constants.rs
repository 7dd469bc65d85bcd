/// Dealfinder system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum raw results requested from the search provider.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Maximum deals surviving verification.
pub const MAX_VERIFIED_RESULTS: usize = 15;

/// Maximum deals in a ranked result set.
pub const MAX_RANKED_RESULTS: usize = 10;

/// Canonical sentinel for a price the normalizer could not resolve.
/// Deals never carry a null price; downstream scoring understands this value.
pub const PRICE_UNRESOLVED: &str = "N/A";

/// Store fallback when a URL yields no recognizable host.
pub const UNKNOWN_STORE: &str = "Unknown Store";

/// Key prefix for cached search result sets.
pub const SEARCH_KEY_PREFIX: &str = "search:";

/// Key prefix for persisted sessions.
pub const SESSION_KEY_PREFIX: &str = "session:";

/// Hex chars of the blake3 digest used for cache keys.
pub const CACHE_KEY_HEX_LEN: usize = 16;

/// Hex chars of the blake3 digest used for deal result ids.
pub const RESULT_ID_HEX_LEN: usize = 12;

/// Keywords kept per deal, first-seen order.
pub const MAX_KEYWORDS: usize = 20;

/// Stored content snippet length, chars.
pub const CONTENT_SNIPPET_LEN: usize = 200;
