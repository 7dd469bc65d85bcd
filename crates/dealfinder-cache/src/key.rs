//! Cache-key derivation.
//!
//! Identical semantic queries with identical filters must always hash
//! identically; distinct queries collide only with negligible probability.

use dealfinder_core::constants::{CACHE_KEY_HEX_LEN, SEARCH_KEY_PREFIX};
use dealfinder_core::models::SearchFilters;

/// 16-hex blake3 digest of the lower-cased, trimmed query plus the
/// canonicalized filter values.
pub fn query_hash(query: &str, filters: &SearchFilters) -> String {
    let normalized = format!("{}|{}", query.trim().to_lowercase(), filters.canonical());
    let digest = blake3::hash(normalized.as_bytes());
    digest.to_hex()[..CACHE_KEY_HEX_LEN].to_string()
}

/// Full store key for a cached search result set.
pub fn search_key(query: &str, filters: &SearchFilters) -> String {
    format!("{SEARCH_KEY_PREFIX}{}", query_hash(query, filters))
}
