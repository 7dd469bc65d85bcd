use dealfinder_core::config::{DealfinderConfig, RankStrategy, Strictness};

#[test]
fn defaults_match_deployment_values() {
    let config = DealfinderConfig::default();
    assert_eq!(config.cache.search_ttl_secs, 3600);
    assert_eq!(config.cache.session_ttl_secs, 86_400);
    assert_eq!(config.cache.store_retry_attempts, 3);
    assert_eq!(config.verification.strictness, Strictness::Moderate);
    assert_eq!(config.verification.probe_workers, 5);
    assert_eq!(config.verification.max_verified_results, 15);
    assert_eq!(config.ranking.strategy, RankStrategy::Hybrid);
    assert_eq!(config.ranking.max_ranked_results, 10);
    assert_eq!(config.search.max_results, 20);
}

#[test]
fn partial_toml_overrides_merge_with_defaults() {
    let toml = r#"
        [verification]
        strictness = "strict"
        probe_workers = 8

        [ranking]
        strategy = "algorithmic"
    "#;
    let config = DealfinderConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.verification.strictness, Strictness::Strict);
    assert_eq!(config.verification.probe_workers, 8);
    assert_eq!(config.ranking.strategy, RankStrategy::Algorithmic);
    // Untouched sections keep defaults.
    assert_eq!(config.cache.search_ttl_secs, 3600);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = DealfinderConfig::from_toml_str("verification = 3").unwrap_err();
    assert!(err.to_string().contains("config error"));
}

#[test]
fn strictness_thresholds_are_contractual() {
    assert_eq!(Strictness::Strict.pass_threshold(), 75.0);
    assert_eq!(Strictness::Moderate.pass_threshold(), 60.0);
    assert_eq!(Strictness::Lenient.pass_threshold(), 40.0);
}

#[test]
fn strategy_confidence_ordering() {
    assert!(RankStrategy::Hybrid.confidence() > RankStrategy::Semantic.confidence());
    assert!(RankStrategy::Semantic.confidence() > RankStrategy::Algorithmic.confidence());
}

#[test]
fn strictness_parses_from_str() {
    assert_eq!("strict".parse::<Strictness>().unwrap(), Strictness::Strict);
    assert!("medium".parse::<Strictness>().is_err());
}
