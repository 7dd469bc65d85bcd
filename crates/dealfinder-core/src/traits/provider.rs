use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{RawBatch, SearchFilters};

/// External search/extract/crawl provider. May return empty, malformed, or
/// error; the normalizer degrades gracefully on anything it hands over.
#[async_trait]
pub trait ISearchProvider: Send + Sync {
    async fn search(&self, query: &str, filters: &SearchFilters)
        -> Result<RawBatch, ProviderError>;

    async fn extract(&self, url: &str) -> Result<String, ProviderError>;

    async fn crawl(
        &self,
        base_url: &str,
        path_hints: &[String],
    ) -> Result<RawBatch, ProviderError>;
}
