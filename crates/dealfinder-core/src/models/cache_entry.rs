use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deal::Deal;

/// One cached result set for a normalized query.
///
/// Created on cache miss after a successful fetch+normalize+verify+rank
/// cycle; never updated in place. A refresh always replaces the whole
/// entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Original query string as typed.
    pub query: String,
    /// 16-hex blake3 key this entry was stored under.
    pub normalized_key: String,
    pub results: Vec<Deal>,
    /// Stored as epoch seconds; a value that fails to decode makes the
    /// whole entry undecodable, which callers treat as expired.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub cached_at: DateTime<Utc>,
    pub ttl_seconds: u64,
}

impl CacheEntry {
    pub fn new(query: String, normalized_key: String, results: Vec<Deal>, ttl_seconds: u64) -> Self {
        Self {
            query,
            normalized_key,
            results,
            cached_at: Utc::now(),
            ttl_seconds,
        }
    }

    /// Age in hours at `now`. Clock skew toward the future reads as zero.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        (now - self.cached_at).num_seconds().max(0) as f64 / 3600.0
    }
}
