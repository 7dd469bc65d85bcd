use tracing::{debug, warn};

use dealfinder_core::constants::{CONTENT_SNIPPET_LEN, PRICE_UNRESOLVED, UNKNOWN_STORE};
use dealfinder_core::deal::{Deal, Descriptors};
use dealfinder_core::models::{RawBatch, RawSearchItem};

use crate::extract::{descriptors, discount, keywords, price, rating, store, title};

/// Chars of raw text preserved on the fallback deal.
const FALLBACK_CONTENT_LEN: usize = 500;

/// Turns raw provider batches into numbered Deal sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a batch, numbering sequentially from 1 in provider order.
    ///
    /// An unstructured batch degrades to exactly one fallback deal carrying
    /// the raw text; this method never fails.
    pub fn normalize(&self, batch: RawBatch) -> Vec<Deal> {
        match batch {
            RawBatch::Structured(items) => {
                let deals: Vec<Deal> = items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| self.normalize_item(item, idx as u32 + 1))
                    .collect();
                debug!(count = deals.len(), "normalized provider batch");
                deals
            }
            RawBatch::Unstructured(text) => {
                warn!("provider batch was unstructured, emitting fallback deal");
                vec![fallback_deal(&text)]
            }
        }
    }

    fn normalize_item(&self, item: &RawSearchItem, result_number: u32) -> Deal {
        let url = item.url.clone().unwrap_or_default();
        let raw_title = item.title.as_deref().unwrap_or("Unknown Product");
        let content = item.content.as_deref().unwrap_or_default();

        let cleaned = title::clean_title(raw_title);
        let clean_name = title::clean_name(&cleaned);
        let store = store::extract_store(&url);
        let price =
            price::extract_price(content).unwrap_or_else(|| PRICE_UNRESOLVED.to_string());

        Deal {
            result_number,
            result_id: Deal::compute_result_id(&url, &cleaned),
            keywords: keywords::extract_keywords(&cleaned, content),
            descriptors: descriptors::extract_descriptors(&cleaned, content, &price, &store),
            discount: discount::extract_discount(content),
            rating: rating::extract_rating(content),
            content: snippet(content, CONTENT_SNIPPET_LEN),
            title: cleaned,
            clean_name,
            price,
            original_price: None,
            store,
            url,
            verification: None,
            scoring: None,
        }
    }
}

/// The single deal emitted when a batch defies parsing: raw text as
/// content, nothing verified, numbered 1.
fn fallback_deal(raw_text: &str) -> Deal {
    Deal {
        result_number: 1,
        result_id: "fallback-0001".to_string(),
        title: "Search Results".to_string(),
        clean_name: "Search Results".to_string(),
        price: PRICE_UNRESOLVED.to_string(),
        original_price: None,
        discount: None,
        store: UNKNOWN_STORE.to_string(),
        rating: None,
        url: String::new(),
        content: snippet(raw_text, FALLBACK_CONTENT_LEN),
        keywords: Vec::new(),
        descriptors: Descriptors {
            store: UNKNOWN_STORE.to_string(),
            ..Default::default()
        },
        verification: None,
        scoring: None,
    }
}

/// Char-safe truncation with an ellipsis.
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
