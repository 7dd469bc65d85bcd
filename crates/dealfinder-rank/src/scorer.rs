//! Six-factor algorithmic scorer.

use dealfinder_core::deal::{Deal, FactorScores};
use dealfinder_core::models::UserPreferences;
use dealfinder_core::price::parse_price;

/// Assumed price range when the user states no budget.
const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Weights for the six scoring factors.
///
/// These exact values are a contract, not a tunable default: downstream
/// consumers and the recorded factor breakdowns assume them.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub price: f64,
    pub discount: f64,
    pub rating: f64,
    pub verification: f64,
    pub relevance: f64,
    pub freshness: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            price: 0.25,
            discount: 0.20,
            rating: 0.15,
            verification: 0.15,
            relevance: 0.15,
            freshness: 0.10,
        }
    }
}

/// Price factor. With a stated budget, over-budget deals score zero and
/// under-budget deals scale by headroom; without one, a linear scale
/// against the assumed $0-$1000 range. No price reads as neutral.
pub fn price_score(deal: &Deal, preferences: &UserPreferences) -> f64 {
    let Some(price) = deal.price_value() else {
        return 50.0;
    };

    if let Some(max_price) = preferences.max_price {
        if price > max_price {
            return 0.0;
        }
        return (((max_price - price) / max_price) * 100.0).min(100.0);
    }

    (100.0 - (price / DEFAULT_PRICE_CEILING) * 100.0).clamp(0.0, 100.0)
}

/// Discount factor: the stated percentage when present, else derived from
/// original vs current price. A price increase never scores positive.
pub fn discount_score(deal: &Deal) -> f64 {
    if let Some(discount) = &deal.discount {
        if let Some(percent) = extract_percent(discount) {
            return percent.min(100.0);
        }
    }

    if let (Some(original), Some(current)) = (
        deal.original_price.as_deref().and_then(parse_price),
        deal.price_value(),
    ) {
        if original > current {
            return (((original - current) / original) * 100.0).min(100.0);
        }
    }

    0.0
}

/// Rating factor: `(rating / 5) x 100`; missing rating is neutral.
pub fn rating_score(deal: &Deal) -> f64 {
    match deal.rating {
        Some(rating) => (rating / 5.0) * 100.0,
        None => 50.0,
    }
}

/// Freshness factor: a binary proxy on URL reachability. True price
/// recency is the freshness policy engine's concern, not this one's.
pub fn freshness_score(deal: &Deal) -> f64 {
    let url_valid = deal
        .verification
        .as_ref()
        .map(|v| v.url_valid)
        .unwrap_or(true);
    if url_valid {
        80.0
    } else {
        40.0
    }
}

/// Full composite: weighted sum of the six factors.
pub fn algorithmic_score(
    deal: &Deal,
    preferences: &UserPreferences,
    weights: &Weights,
) -> (f64, FactorScores) {
    let verification = deal
        .verification
        .as_ref()
        .map(|v| v.overall_score)
        .unwrap_or(50.0);
    let relevance = deal
        .verification
        .as_ref()
        .map(|v| v.relevance_score)
        .unwrap_or(50.0);

    let factors = FactorScores {
        price: price_score(deal, preferences),
        discount: discount_score(deal),
        rating: rating_score(deal),
        verification,
        relevance,
        freshness: freshness_score(deal),
    };

    let score = factors.price * weights.price
        + factors.discount * weights.discount
        + factors.rating * weights.rating
        + factors.verification * weights.verification
        + factors.relevance * weights.relevance
        + factors.freshness * weights.freshness;

    (score, factors)
}

fn extract_percent(discount: &str) -> Option<f64> {
    let digits: String = discount
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if discount.contains('%') && !digits.is_empty() {
        digits.parse().ok()
    } else {
        None
    }
}
