use std::sync::Arc;
use tracing::{debug, info, warn};

use dealfinder_core::deal::Deal;
use dealfinder_core::errors::DealResult;
use dealfinder_core::models::{CacheEntry, SearchFilters};
use dealfinder_core::traits::ICacheStore;

use crate::key;
use crate::retry::with_retry;

/// Store-backed cache of normalized, verified, ranked result sets.
///
/// `get` reports a hit strictly on key existence and store-enforced TTL; it
/// does not apply the 24-hour freshness ceiling. Callers run
/// `check_validity` on the returned entry before trusting it.
pub struct ResultCache {
    store: Arc<dyn ICacheStore>,
    retry_attempts: u32,
}

impl ResultCache {
    pub fn new(store: Arc<dyn ICacheStore>, retry_attempts: u32) -> Self {
        Self {
            store,
            retry_attempts,
        }
    }

    /// Look up a cached result set. A stored value that fails to decode is
    /// treated as a miss (expired), never served.
    pub async fn get(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> DealResult<Option<CacheEntry>> {
        let store_key = key::search_key(query, filters);
        let raw = with_retry(self.retry_attempts, || {
            let store = Arc::clone(&self.store);
            let store_key = store_key.clone();
            async move { store.get(&store_key).await }
        })
        .await?;

        let Some(raw) = raw else {
            debug!(%store_key, "cache miss");
            return Ok(None);
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => {
                info!(%store_key, results = entry.results.len(), "cache hit");
                Ok(Some(entry))
            }
            Err(err) => {
                warn!(%store_key, error = %err, "undecodable cache entry, treating as expired");
                Ok(None)
            }
        }
    }

    /// Write back a result set under the TTL the freshness engine chose.
    /// A refresh always replaces the whole entry.
    pub async fn put(
        &self,
        query: &str,
        filters: &SearchFilters,
        results: Vec<Deal>,
        ttl_seconds: u64,
    ) -> DealResult<()> {
        let store_key = key::search_key(query, filters);
        let entry = CacheEntry::new(
            query.to_string(),
            key::query_hash(query, filters),
            results,
            ttl_seconds,
        );
        let payload = serde_json::to_string(&entry)?;

        with_retry(self.retry_attempts, || {
            let store = Arc::clone(&self.store);
            let store_key = store_key.clone();
            let payload = payload.clone();
            async move { store.set_with_ttl(&store_key, &payload, ttl_seconds).await }
        })
        .await?;

        info!(%store_key, results = entry.results.len(), ttl_seconds, "cached result set");
        Ok(())
    }
}
