use async_trait::async_trait;
use std::sync::Arc;

use dealfinder_core::config::{RankStrategy, RankingConfig};
use dealfinder_core::deal::{Deal, Descriptors, VerificationRecord};
use dealfinder_core::errors::ProviderError;
use dealfinder_core::models::UserPreferences;
use dealfinder_core::traits::ICompletion;
use dealfinder_rank::RerankEngine;

fn verified_deal(number: u32, title: &str, price: &str) -> Deal {
    Deal {
        result_number: number,
        result_id: format!("id{number:09}"),
        title: title.to_string(),
        clean_name: title.to_string(),
        price: price.to_string(),
        original_price: None,
        discount: None,
        store: "Amazon".to_string(),
        rating: Some(4.0),
        url: format!("https://a.com/{number}"),
        content: format!("{title} for sale"),
        keywords: vec![],
        descriptors: Descriptors::default(),
        verification: Some(VerificationRecord {
            verified: true,
            completeness_score: 75.0,
            relevance_score: 80.0,
            overall_score: 78.0,
            url_valid: true,
            reason: "Passed verification".to_string(),
        }),
        scoring: None,
    }
}

/// Completion stub replying with a fixed adjustment list.
struct ScriptedCompletion {
    response: String,
}

#[async_trait]
impl ICompletion for ScriptedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.response.clone())
    }
}

/// Completion stub that always fails.
struct DownCompletion;

#[async_trait]
impl ICompletion for DownCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::CompletionFailed {
            reason: "model endpoint unreachable".to_string(),
        })
    }
}

fn iphone_batch() -> Vec<Deal> {
    vec![
        verified_deal(1, "iPhone 15", "$899.00"),
        verified_deal(2, "iPhone 15", "$699.00"),
        verified_deal(3, "iPhone 15", "$799.00"),
    ]
}

#[tokio::test]
async fn algorithmic_ranks_cheapest_first_all_else_equal() {
    let engine = RerankEngine::new(RankingConfig::default(), None);
    let (ranked, meta, degradation) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Algorithmic,
        )
        .await;

    let prices: Vec<&str> = ranked.iter().map(|d| d.price.as_str()).collect();
    assert_eq!(prices, vec!["$699.00", "$799.00", "$899.00"]);
    assert_eq!(meta.confidence, 0.7);
    assert!(degradation.is_none());
    assert!(ranked.iter().all(|d| d.scoring.is_some()));
}

#[tokio::test]
async fn hybrid_ranks_cheapest_highest_absent_other_preferences() {
    // Neutral adjustments leave the algorithmic order in charge.
    let completion = Arc::new(ScriptedCompletion {
        response: "1. Boost: 0, Reason: neutral\n2. Boost: 0, Reason: neutral\n3. Boost: 0, Reason: neutral".to_string(),
    });
    let engine = RerankEngine::new(RankingConfig::default(), Some(completion));
    let (ranked, meta, _) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Hybrid,
        )
        .await;

    assert_eq!(ranked[0].price, "$699.00");
    assert_eq!(meta.confidence, 0.9);
}

#[tokio::test]
async fn hybrid_sums_composite_and_boost() {
    // Item 1 (at index 1 in the prompt order = input order here) gets a
    // large boost that should overcome its price disadvantage.
    let completion = Arc::new(ScriptedCompletion {
        response: "1. Boost: 20, Reason: flagship pick".to_string(),
    });
    let engine = RerankEngine::new(RankingConfig::default(), Some(completion));
    let (ranked, _, _) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Hybrid,
        )
        .await;

    // The $899 deal (input position 1) was boosted by +20: composite gap
    // between $899 and $699 is 200 * 0.25 / 10 = 5 points, so it wins.
    assert_eq!(ranked[0].price, "$899.00");
    let record = ranked[0].scoring.as_ref().unwrap();
    assert_eq!(record.semantic_boost, Some(20.0));
    assert!((record.final_score - record.algorithmic_score - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn semantic_strategy_sorts_by_boost_alone() {
    let completion = Arc::new(ScriptedCompletion {
        response: "1. Boost: -10, Reason: poor fit\n\
                   2. Boost: 5, Reason: decent\n\
                   3. Boost: 15, Reason: best fit"
            .to_string(),
    });
    let engine = RerankEngine::new(RankingConfig::default(), Some(completion));
    let (ranked, meta, _) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Semantic,
        )
        .await;

    let numbers: Vec<u32> = ranked.iter().map(|d| d.result_number).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(meta.confidence, 0.85);
}

#[tokio::test]
async fn failed_completion_degrades_to_algorithmic_order() {
    let engine = RerankEngine::new(RankingConfig::default(), Some(Arc::new(DownCompletion)));
    let (ranked, _, degradation) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Hybrid,
        )
        .await;

    assert_eq!(ranked[0].price, "$699.00");
    assert!(degradation.is_some());
}

#[tokio::test]
async fn unparsable_completion_is_no_adjustment_not_an_error() {
    let completion = Arc::new(ScriptedCompletion {
        response: "I'd rather not rank products today.".to_string(),
    });
    let engine = RerankEngine::new(RankingConfig::default(), Some(completion));
    let (ranked, _, degradation) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Hybrid,
        )
        .await;

    assert!(degradation.is_none());
    assert_eq!(ranked[0].price, "$699.00");
    assert!(ranked.iter().all(|d| d.scoring.as_ref().unwrap().semantic_boost.is_none()));
}

#[tokio::test]
async fn over_budget_deals_sink() {
    let engine = RerankEngine::new(RankingConfig::default(), None);
    let prefs = UserPreferences {
        max_price: Some(850.0),
    };
    let (ranked, _, _) = engine
        .rerank(&iphone_batch(), "iPhone 15 deals", &prefs, RankStrategy::Algorithmic)
        .await;

    // $899 is over budget (price factor 0) and lands last.
    assert_eq!(ranked.last().unwrap().price, "$899.00");
    let zeroed = ranked.last().unwrap().scoring.as_ref().unwrap();
    assert_eq!(zeroed.factors.price, 0.0);
}

#[tokio::test]
async fn output_is_capped() {
    let config = RankingConfig {
        max_ranked_results: 2,
        ..Default::default()
    };
    let engine = RerankEngine::new(config, None);
    let (ranked, meta, _) = engine
        .rerank(
            &iphone_batch(),
            "iPhone 15 deals",
            &UserPreferences::default(),
            RankStrategy::Algorithmic,
        )
        .await;

    assert_eq!(ranked.len(), 2);
    assert_eq!(meta.count, 2);
}
