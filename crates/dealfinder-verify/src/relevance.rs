//! Query-relevance scoring, 0-100.

use std::collections::HashSet;

use dealfinder_core::deal::Deal;

/// Retailers whose presence boosts relevance.
const MAJOR_RETAILERS: &[&str] = &["amazon", "ebay", "walmart", "target", "bestbuy", "costco"];

/// Score a deal's relevance to the query.
///
/// Starts at a neutral 50: +15 for a resolved price, up to +10 scaled by
/// rating, +10 for any discount signal, +10 for a major retailer, plus up
/// to +7 from query/title/content word overlap. Capped at 100.
pub fn score(deal: &Deal, query: &str) -> f64 {
    let mut score = 50.0;

    if deal.has_price() {
        score += 15.0;
    }

    if let Some(rating) = deal.rating {
        score += (rating / 5.0) * 10.0;
    }

    if deal.has_discount_signal() {
        score += 10.0;
    }

    let store_compact = deal.store.to_lowercase().replace(' ', "");
    if MAJOR_RETAILERS.iter().any(|r| store_compact.contains(r)) {
        score += 10.0;
    }

    if !query.is_empty() {
        let query_words = word_set(query);
        if !query_words.is_empty() {
            let title_overlap = overlap_ratio(&query_words, &word_set(&deal.title));
            let content_overlap = overlap_ratio(&query_words, &word_set(&deal.content));
            score += title_overlap * 5.0;
            score += content_overlap * 2.0;
        }
    }

    score.min(100.0)
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn overlap_ratio(query_words: &HashSet<String>, other: &HashSet<String>) -> f64 {
    let shared = query_words.intersection(other).count();
    shared as f64 / query_words.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealfinder_core::deal::Descriptors;

    fn bare_deal() -> Deal {
        Deal {
            result_number: 1,
            result_id: "abc".to_string(),
            title: "Widget".to_string(),
            clean_name: "Widget".to_string(),
            price: "N/A".to_string(),
            original_price: None,
            discount: None,
            store: "Someshop".to_string(),
            rating: None,
            url: "https://example.com".to_string(),
            content: String::new(),
            keywords: vec![],
            descriptors: Descriptors::default(),
            verification: None,
            scoring: None,
        }
    }

    #[test]
    fn bare_deal_sits_at_base() {
        assert_eq!(score(&bare_deal(), ""), 50.0);
    }

    #[test]
    fn price_rating_discount_store_all_boost() {
        let mut deal = bare_deal();
        deal.price = "$99.00".to_string();
        deal.rating = Some(5.0);
        deal.discount = Some("10% off".to_string());
        deal.store = "Best Buy".to_string();
        // 50 + 15 + 10 + 10 + 10
        assert_eq!(score(&deal, ""), 95.0);
    }

    #[test]
    fn full_title_overlap_adds_five() {
        let mut deal = bare_deal();
        deal.title = "iPhone 15 Pro".to_string();
        let with_overlap = score(&deal, "iphone 15 pro");
        let without = score(&deal, "android tablet");
        assert!((with_overlap - without - 5.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_capped() {
        let mut deal = bare_deal();
        deal.price = "$99.00".to_string();
        deal.rating = Some(5.0);
        deal.discount = Some("50% off".to_string());
        deal.store = "Amazon".to_string();
        deal.title = "iphone deals".to_string();
        deal.content = "iphone deals".to_string();
        assert!(score(&deal, "iphone deals") <= 100.0);
    }
}
