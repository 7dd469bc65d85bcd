use chrono::{Duration, Utc};
use dealfinder_core::models::CacheEntry;
use dealfinder_freshness::{FreshnessEngine, MAX_DEAL_AGE_HOURS, PRICE_SENSITIVE_CAP_HOURS};
use proptest::prelude::*;

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{3,12}( [a-z]{3,12}){0,3}",
        Just("cheapest iphone 15".to_string()),
        Just("best deal on ps5".to_string()),
        Just("kitchen table".to_string()),
        Just("mystery novel".to_string()),
    ]
}

proptest! {
    /// TTL never exceeds the 24-hour ceiling.
    #[test]
    fn ttl_never_exceeds_ceiling(query in arb_query()) {
        let engine = FreshnessEngine::new();
        let ttl = engine.optimal_ttl(&query, None);
        prop_assert!(ttl <= (MAX_DEAL_AGE_HOURS as u64) * 3600);
    }

    /// Price-sensitive queries never exceed the 4-hour cap, and the cap
    /// never raises a category that was already tighter.
    #[test]
    fn price_sensitive_cap_holds(query in arb_query()) {
        let engine = FreshnessEngine::new();
        let sensitive = format!("cheapest {query}");
        let ttl = engine.optimal_ttl(&sensitive, None);
        prop_assert!(ttl <= PRICE_SENSITIVE_CAP_HOURS * 3600);
        prop_assert!(ttl <= engine.optimal_ttl(&query, None));
    }

    /// Any entry at or past 24 hours is invalid regardless of category.
    #[test]
    fn ceiling_always_invalidates(query in arb_query(), extra_mins in 0i64..10_000) {
        let engine = FreshnessEngine::new();
        let mut entry = CacheEntry::new(query, "key".to_string(), vec![], 3600);
        entry.cached_at = Utc::now() - Duration::hours(24) - Duration::minutes(extra_mins);

        let verdict = engine.check_validity(&entry, Utc::now());
        prop_assert!(!verdict.valid);
    }

    /// Below the ceiling an entry is always valid (action may still ask
    /// for a refresh, but the data is servable).
    #[test]
    fn below_ceiling_is_valid(query in arb_query(), age_mins in 0i64..(24 * 60 - 1)) {
        let engine = FreshnessEngine::new();
        let mut entry = CacheEntry::new(query, "key".to_string(), vec![], 3600);
        entry.cached_at = Utc::now() - Duration::minutes(age_mins);

        let verdict = engine.check_validity(&entry, Utc::now());
        prop_assert!(verdict.valid);
    }
}
