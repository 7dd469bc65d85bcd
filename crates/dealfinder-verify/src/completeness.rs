//! Field-completeness assessment.

use dealfinder_core::deal::Deal;

/// Required fields: a deal without these auto-fails regardless of
/// strictness.
const REQUIRED: &[&str] = &["title", "url"];
/// Important fields: strictness decides how many may be missing.
const IMPORTANT: &[&str] = &["price", "store", "content"];
/// Optional fields: only contribute to the score.
const OPTIONAL: &[&str] = &["rating", "discount", "original_price"];

/// Outcome of the completeness check for one deal.
#[derive(Debug, Clone)]
pub struct CompletenessReport {
    /// False iff a required field is missing.
    pub required_ok: bool,
    /// Present-fields ratio over all tracked fields, 0-100.
    pub score: f64,
    /// Names of missing important fields.
    pub missing_important: Vec<&'static str>,
    /// Names of missing required fields.
    pub missing_required: Vec<&'static str>,
}

/// Assess field completeness. The unresolved-price sentinel counts as
/// missing; "Unknown Store" still counts as a store.
pub fn assess(deal: &Deal) -> CompletenessReport {
    let missing_required: Vec<&'static str> = REQUIRED
        .iter()
        .copied()
        .filter(|f| !field_present(deal, f))
        .collect();
    let missing_important: Vec<&'static str> = IMPORTANT
        .iter()
        .copied()
        .filter(|f| !field_present(deal, f))
        .collect();

    let total = REQUIRED.len() + IMPORTANT.len() + OPTIONAL.len();
    let present = REQUIRED
        .iter()
        .chain(IMPORTANT.iter())
        .chain(OPTIONAL.iter())
        .filter(|f| field_present(deal, f))
        .count();

    CompletenessReport {
        required_ok: missing_required.is_empty(),
        score: (present as f64 / total as f64) * 100.0,
        missing_important,
        missing_required,
    }
}

fn field_present(deal: &Deal, field: &str) -> bool {
    match field {
        "title" => !deal.title.is_empty(),
        "url" => !deal.url.is_empty(),
        "price" => deal.has_price(),
        "store" => !deal.store.is_empty(),
        "content" => !deal.content.is_empty(),
        "rating" => deal.rating.is_some(),
        "discount" => deal.discount.is_some(),
        "original_price" => deal.original_price.is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealfinder_core::deal::Descriptors;

    fn full_deal() -> Deal {
        Deal {
            result_number: 1,
            result_id: "abc".to_string(),
            title: "Widget".to_string(),
            clean_name: "Widget".to_string(),
            price: "$99.00".to_string(),
            original_price: Some("$120.00".to_string()),
            discount: Some("Save $21".to_string()),
            store: "Amazon".to_string(),
            rating: Some(4.0),
            url: "https://example.com".to_string(),
            content: "a widget".to_string(),
            keywords: vec![],
            descriptors: Descriptors::default(),
            verification: None,
            scoring: None,
        }
    }

    #[test]
    fn full_deal_scores_hundred() {
        let report = assess(&full_deal());
        assert!(report.required_ok);
        assert_eq!(report.score, 100.0);
        assert!(report.missing_important.is_empty());
    }

    #[test]
    fn missing_url_breaks_required() {
        let mut deal = full_deal();
        deal.url = String::new();
        let report = assess(&deal);
        assert!(!report.required_ok);
        assert_eq!(report.missing_required, vec!["url"]);
    }

    #[test]
    fn price_sentinel_counts_as_missing() {
        let mut deal = full_deal();
        deal.price = "N/A".to_string();
        let report = assess(&deal);
        assert!(report.required_ok);
        assert_eq!(report.missing_important, vec!["price"]);
        assert!((report.score - (7.0 / 8.0 * 100.0)).abs() < 1e-9);
    }
}
