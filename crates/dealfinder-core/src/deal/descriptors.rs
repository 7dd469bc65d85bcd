use serde::{Deserialize, Serialize};
use std::fmt;

/// Product condition, decided by keyword presence during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    New,
    Refurbished,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Refurbished => write!(f, "Refurbished"),
        }
    }
}

/// Price tier, computed only when a price resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
    /// Under $100.
    Budget,
    /// Under $500.
    MidRange,
    /// $500 and up.
    Premium,
}

impl PriceTier {
    pub fn from_price(price: f64) -> Self {
        if price < 100.0 {
            Self::Budget
        } else if price < 500.0 {
            Self::MidRange
        } else {
            Self::Premium
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::MidRange => write!(f, "mid-range"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

/// Extracted product attributes used for reference matching
/// ("the blue one", "the 256GB model", "the Amazon deal").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Descriptors {
    pub color: Option<String>,
    pub storage: Option<String>,
    pub condition: Condition,
    pub price_tier: Option<PriceTier>,
    pub store: String,
}

impl Descriptors {
    /// All attribute values as lowercase tokens, for index building and
    /// substring matching.
    pub fn tokens(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(color) = &self.color {
            out.push(color.to_lowercase());
        }
        if let Some(storage) = &self.storage {
            out.push(storage.to_lowercase());
        }
        out.push(self.condition.to_string().to_lowercase());
        if let Some(tier) = self.price_tier {
            out.push(tier.to_string());
        }
        if !self.store.is_empty() {
            out.push(self.store.to_lowercase());
        }
        out
    }
}
