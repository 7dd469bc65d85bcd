use async_trait::async_trait;

use crate::errors::StoreError;

/// Key/value store with per-key TTL, atomic get/set, and prefix
/// enumeration. The only shared mutable resource in the system; all access
/// is key-scoped, no cross-key transactions.
#[async_trait]
pub trait ICacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError>;

    /// All live keys starting with `prefix`.
    async fn keys_by_pattern(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Remaining TTL in seconds, `None` if the key does not exist.
    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
