use serde::{Deserialize, Serialize};

use super::descriptors::Descriptors;
use super::scoring::ScoringRecord;
use super::verification::VerificationRecord;
use crate::constants::{PRICE_UNRESOLVED, RESULT_ID_HEX_LEN};
use crate::price;

/// One discovered offer. Every result flowing through the pipeline is a Deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    /// 1-based position in the normalized batch, contiguous, stable for the
    /// lifetime of the session's result set.
    pub result_number: u32,
    /// blake3 content hash of URL + clean name, used for deduplication
    /// across refreshes.
    pub result_id: String,
    /// Cleaned title.
    pub title: String,
    /// Short product name extracted from the title.
    pub clean_name: String,
    /// Display price, or the `PRICE_UNRESOLVED` sentinel. Never empty.
    pub price: String,
    /// Pre-discount price when the listing exposes one.
    pub original_price: Option<String>,
    /// Discount signal as found ("25% off", "Save $50").
    pub discount: Option<String>,
    /// Store brand resolved from the URL host.
    pub store: String,
    /// Star rating in [0, 5].
    pub rating: Option<f64>,
    /// Source listing URL.
    pub url: String,
    /// Content snippet, capped at `CONTENT_SNIPPET_LEN` chars.
    pub content: String,
    /// Searchable keywords, first-seen order, at most `MAX_KEYWORDS`.
    pub keywords: Vec<String>,
    /// Extracted attributes used by reference resolution.
    pub descriptors: Descriptors,
    /// Result of the latest verification pass. A new pass produces a new
    /// record; records are never mutated in place.
    pub verification: Option<VerificationRecord>,
    /// Result of the latest ranking pass.
    pub scoring: Option<ScoringRecord>,
}

impl Deal {
    /// Compute the blake3 result id from URL + clean name.
    pub fn compute_result_id(url: &str, clean_name: &str) -> String {
        let digest = blake3::hash(format!("{url}{clean_name}").as_bytes());
        digest.to_hex()[..RESULT_ID_HEX_LEN].to_string()
    }

    /// Whether the normalizer resolved a price for this deal.
    pub fn has_price(&self) -> bool {
        self.price != PRICE_UNRESOLVED && !self.price.is_empty()
    }

    /// Numeric price, if resolvable.
    pub fn price_value(&self) -> Option<f64> {
        price::parse_price(&self.price)
    }

    /// Whether any discount signal is present (explicit discount string or
    /// an original price to derive one from).
    pub fn has_discount_signal(&self) -> bool {
        self.discount.as_deref().is_some_and(|d| !d.is_empty()) || self.original_price.is_some()
    }

    /// Whether the latest verification pass marked the deal verified.
    pub fn is_verified(&self) -> bool {
        self.verification.as_ref().is_some_and(|v| v.verified)
    }
}

/// Identity equality: two deals are equal if they carry the same result id.
/// Content comparison is not meaningful across refreshes.
impl PartialEq for Deal {
    fn eq(&self, other: &Self) -> bool {
        self.result_id == other.result_id
    }
}
