//! In-memory `ICacheStore` adapter with per-key TTLs.
//!
//! Stands in for the external store in tests and single-process
//! deployments; the contract is identical.

use async_trait::async_trait;
use moka::sync::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};

use dealfinder_core::errors::StoreError;
use dealfinder_core::traits::ICacheStore;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    ttl: Duration,
    expires_at: Instant,
}

struct PerEntryExpiry;

impl Expiry<String, StoredValue> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Thread-safe in-memory store with store-enforced per-key TTL.
pub struct MemoryStore {
    cache: Cache<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(10_000)
                .expire_after(PerEntryExpiry)
                .build(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ICacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cache.get(key).map(|v| v.value))
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        let ttl = Duration::from_secs(ttl_seconds.max(1));
        self.cache.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                ttl,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn keys_by_pattern(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .cache
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.as_ref().clone())
            .collect())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self
            .cache
            .get(key)
            .map(|v| v.expires_at.saturating_duration_since(Instant::now()).as_secs()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.cache.invalidate(key);
        Ok(())
    }
}
