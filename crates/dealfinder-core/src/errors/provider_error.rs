/// Search / extraction / completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("extraction failed for {url}: {reason}")]
    ExtractFailed { url: String, reason: String },

    #[error("crawl failed for {base_url}: {reason}")]
    CrawlFailed { base_url: String, reason: String },

    #[error("provider returned an empty batch")]
    EmptyBatch,

    #[error("completion call failed: {reason}")]
    CompletionFailed { reason: String },
}
