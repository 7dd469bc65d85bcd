use dealfinder_cache::key;
use dealfinder_core::models::SearchFilters;
use proptest::prelude::*;

proptest! {
    /// Queries identical after lower-casing/trimming hash identically.
    #[test]
    fn normalization_equivalence(
        core in "[a-zA-Z0-9 ]{1,40}",
        left_pad in "[ \t]{0,4}",
        right_pad in "[ \t]{0,4}",
    ) {
        let filters = SearchFilters::default();
        let padded = format!("{left_pad}{core}{right_pad}");
        prop_assert_eq!(
            key::query_hash(&core.to_uppercase(), &filters),
            key::query_hash(&padded.to_lowercase(), &filters)
        );
    }

    /// The hash is always 16 lowercase hex chars.
    #[test]
    fn hash_shape(query in ".{0,60}") {
        let hash = key::query_hash(&query, &SearchFilters::default());
        prop_assert_eq!(hash.len(), 16);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// Changing the max-price filter always changes the key.
    #[test]
    fn filters_never_alias(query in "[a-z ]{1,30}", price in 1.0f64..5000.0) {
        let none = SearchFilters::default();
        let capped = SearchFilters { max_price: Some(price), ..Default::default() };
        prop_assert_ne!(
            key::query_hash(&query, &none),
            key::query_hash(&query, &capped)
        );
    }
}
