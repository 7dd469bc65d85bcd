use dealfinder_core::models::{RawBatch, RawSearchItem};
use dealfinder_normalize::Normalizer;
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = RawSearchItem> {
    (
        proptest::option::of("[a-zA-Z0-9 \\-]{0,60}"),
        proptest::option::of("https://[a-z]{3,10}\\.com/[a-z0-9]{0,12}"),
        proptest::option::of(".{0,200}"),
    )
        .prop_map(|(title, url, content)| RawSearchItem {
            title,
            url,
            content,
            score: None,
        })
}

proptest! {
    /// A batch of N items yields N deals numbered exactly 1..=N in order.
    #[test]
    fn numbering_round_trip(items in proptest::collection::vec(arb_item(), 0..25)) {
        let normalizer = Normalizer::new();
        let n = items.len();
        let deals = normalizer.normalize(RawBatch::Structured(items));

        prop_assert_eq!(deals.len(), n);
        for (idx, deal) in deals.iter().enumerate() {
            prop_assert_eq!(deal.result_number as usize, idx + 1);
        }
    }

    /// Every deal carries a non-empty price field (sentinel or value) and
    /// a non-empty store.
    #[test]
    fn no_null_prices_or_stores(items in proptest::collection::vec(arb_item(), 1..15)) {
        let normalizer = Normalizer::new();
        for deal in normalizer.normalize(RawBatch::Structured(items)) {
            prop_assert!(!deal.price.is_empty());
            prop_assert!(!deal.store.is_empty());
        }
    }

    /// Ratings, when extracted, always land in [0, 5].
    #[test]
    fn ratings_in_bounds(content in ".{0,200}") {
        let normalizer = Normalizer::new();
        let deals = normalizer.normalize(RawBatch::Structured(vec![RawSearchItem {
            title: Some("Widget".to_string()),
            url: Some("https://example.com/w".to_string()),
            content: Some(content),
            score: None,
        }]));
        if let Some(rating) = deals[0].rating {
            prop_assert!((0.0..=5.0).contains(&rating));
        }
    }

    /// Keyword lists never exceed the cap and never contain stop-words.
    #[test]
    fn keyword_bounds(title in "[a-z ]{0,80}", content in "[a-z ]{0,200}") {
        let normalizer = Normalizer::new();
        let deals = normalizer.normalize(RawBatch::Structured(vec![RawSearchItem {
            title: Some(title),
            url: None,
            content: Some(content),
            score: None,
        }]));
        let keywords = &deals[0].keywords;
        prop_assert!(keywords.len() <= 20);
        prop_assert!(keywords.iter().all(|k| k.len() > 2));
        prop_assert!(!keywords.iter().any(|k| k == "the" || k == "and"));
    }
}
