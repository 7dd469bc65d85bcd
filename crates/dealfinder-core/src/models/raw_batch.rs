use serde::{Deserialize, Serialize};

/// One raw item from the search provider, already shaped at the adapter
/// boundary. Fields are optional because providers return sparse records;
/// the normalizer fills the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchItem {
    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    /// Provider-side relevance score, if exposed. Not trusted for ranking.
    pub score: Option<f64>,
}

/// A provider batch. The adapter is required to hand over structured items
/// whenever it can; when the provider's output defies parsing entirely, the
/// raw text travels instead and the normalizer degrades to a single
/// fallback deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RawBatch {
    Structured(Vec<RawSearchItem>),
    Unstructured(String),
}

/// Search filter parameters. Canonicalized into the cache key so identical
/// queries with different filters never collide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub max_price: Option<f64>,
}

impl SearchFilters {
    /// Stable canonical form for key hashing. Field order is fixed; absent
    /// fields serialize as an empty slot so adding a filter can never alias
    /// an existing key.
    pub fn canonical(&self) -> String {
        format!(
            "category={}|max_price={}",
            self.category.as_deref().unwrap_or(""),
            self.max_price.map(|p| format!("{p:.2}")).unwrap_or_default(),
        )
    }
}
