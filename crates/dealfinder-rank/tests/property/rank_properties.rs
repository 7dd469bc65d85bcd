use dealfinder_core::deal::{Deal, Descriptors};
use dealfinder_core::models::UserPreferences;
use dealfinder_core::price::format_price;
use dealfinder_rank::{scorer, Weights};
use proptest::prelude::*;

fn deal_with(price: f64, rating: Option<f64>) -> Deal {
    Deal {
        result_number: 1,
        result_id: "abc".to_string(),
        title: "Widget".to_string(),
        clean_name: "Widget".to_string(),
        price: format_price(price),
        original_price: None,
        discount: None,
        store: "Amazon".to_string(),
        rating,
        url: "https://a.com".to_string(),
        content: String::new(),
        keywords: vec![],
        descriptors: Descriptors::default(),
        verification: None,
        scoring: None,
    }
}

proptest! {
    /// Increasing a deal's rating never decreases its rating score or its
    /// algorithmic composite, all else equal.
    #[test]
    fn rating_is_monotone(
        price in 1.0f64..2000.0,
        low in 0.0f64..=5.0,
        bump in 0.0f64..=5.0,
    ) {
        let high = (low + bump).min(5.0);
        let weights = Weights::default();
        let prefs = UserPreferences::default();

        let low_deal = deal_with(price, Some(low));
        let high_deal = deal_with(price, Some(high));

        prop_assert!(scorer::rating_score(&high_deal) >= scorer::rating_score(&low_deal));

        let (low_score, _) = scorer::algorithmic_score(&low_deal, &prefs, &weights);
        let (high_score, _) = scorer::algorithmic_score(&high_deal, &prefs, &weights);
        prop_assert!(high_score >= low_score - 1e-9);
    }

    /// Factor scores always land in [0, 100], so the weighted composite
    /// does too.
    #[test]
    fn composite_is_bounded(
        price in 0.0f64..10_000.0,
        rating in proptest::option::of(0.0f64..=5.0),
        max_price in proptest::option::of(1.0f64..5000.0),
    ) {
        let deal = deal_with(price, rating);
        let prefs = UserPreferences { max_price };
        let (score, factors) = scorer::algorithmic_score(&deal, &prefs, &Weights::default());

        for factor in [
            factors.price,
            factors.discount,
            factors.rating,
            factors.verification,
            factors.relevance,
            factors.freshness,
        ] {
            prop_assert!((0.0..=100.0).contains(&factor));
        }
        prop_assert!((0.0..=100.0).contains(&score));
    }

    /// A cheaper deal never scores lower on the price factor than a more
    /// expensive one under the same budget.
    #[test]
    fn cheaper_never_price_scores_worse(
        cheap in 1.0f64..1000.0,
        gap in 0.0f64..1000.0,
        max_price in proptest::option::of(1.0f64..2000.0),
    ) {
        let prefs = UserPreferences { max_price };
        let cheap_deal = deal_with(cheap, None);
        let pricey_deal = deal_with(cheap + gap, None);

        prop_assert!(
            scorer::price_score(&cheap_deal, &prefs) >= scorer::price_score(&pricey_deal, &prefs) - 1e-9
        );
    }
}
