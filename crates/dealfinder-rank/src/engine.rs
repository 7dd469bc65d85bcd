use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

use dealfinder_core::config::{RankStrategy, RankingConfig};
use dealfinder_core::deal::{Deal, ScoringRecord};
use dealfinder_core::errors::RankingError;
use dealfinder_core::models::{RankingMetadata, ScoreRange, UserPreferences};
use dealfinder_core::traits::ICompletion;

use crate::scorer::{self, Weights};
use crate::semantic;

/// The reranking engine. The completion capability is optional: without
/// one, semantic and hybrid strategies degrade to the algorithmic order.
pub struct RerankEngine {
    config: RankingConfig,
    weights: Weights,
    completion: Option<Arc<dyn ICompletion>>,
}

impl RerankEngine {
    pub fn new(config: RankingConfig, completion: Option<Arc<dyn ICompletion>>) -> Self {
        Self {
            config,
            weights: Weights::default(),
            completion,
        }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank verified deals under the given strategy.
    ///
    /// Every returned deal carries a scoring record. Semantic failures
    /// degrade to the algorithmic composite and are reported through the
    /// metadata's strategy field, never as an error: the caller records the
    /// degradation and moves on.
    pub async fn rerank(
        &self,
        deals: &[Deal],
        query: &str,
        preferences: &UserPreferences,
        strategy: RankStrategy,
    ) -> (Vec<Deal>, RankingMetadata, Option<RankingError>) {
        if deals.is_empty() {
            return (
                Vec::new(),
                metadata(strategy, 0, &[]),
                None,
            );
        }

        // Stage 1: algorithmic composite for every deal.
        let mut scored: Vec<Deal> = deals
            .iter()
            .map(|deal| {
                let (score, factors) = scorer::algorithmic_score(deal, preferences, &self.weights);
                let mut scored_deal = deal.clone();
                scored_deal.scoring = Some(ScoringRecord::algorithmic(score, factors));
                scored_deal
            })
            .collect();

        // Stage 2: strategy-specific ordering.
        let mut degradation = None;
        match strategy {
            RankStrategy::Algorithmic => {
                sort_by_final(&mut scored);
            }
            RankStrategy::Semantic | RankStrategy::Hybrid => {
                match self.semantic_adjust(&mut scored, query).await {
                    Ok(()) => {
                        if strategy == RankStrategy::Semantic {
                            sort_by_boost(&mut scored);
                        } else {
                            sort_by_final(&mut scored);
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "semantic adjustment unavailable, using algorithmic order");
                        sort_by_final(&mut scored);
                        degradation = Some(err);
                    }
                }
            }
        }

        scored.truncate(self.config.max_ranked_results);

        let final_scores: Vec<f64> = scored
            .iter()
            .filter_map(|d| d.scoring.as_ref().map(|s| s.final_score))
            .collect();
        let meta = metadata(strategy, scored.len(), &final_scores);

        info!(
            strategy = %strategy,
            count = meta.count,
            confidence = meta.confidence,
            "reranked results"
        );

        (scored, meta, degradation)
    }

    /// Ask the completion capability for bounded per-item boosts and fold
    /// them into the scoring records.
    async fn semantic_adjust(&self, scored: &mut [Deal], query: &str) -> Result<(), RankingError> {
        let Some(completion) = &self.completion else {
            return Err(RankingError::SemanticUnavailable {
                reason: "no completion capability configured".to_string(),
            });
        };

        let prompt = semantic::build_prompt(scored, query, self.config.max_ranked_results);
        let response =
            completion
                .complete(&prompt)
                .await
                .map_err(|e| RankingError::SemanticUnavailable {
                    reason: e.to_string(),
                })?;

        // A response with no parsable lines is "no adjustment produced",
        // which is a valid (if unhelpful) outcome.
        for adjustment in semantic::parse_adjustments(&response) {
            if let Some(deal) = scored.get_mut(adjustment.index) {
                if let Some(record) = deal.scoring.take() {
                    deal.scoring =
                        Some(record.with_boost(adjustment.boost, adjustment.reason.clone()));
                }
            }
        }
        Ok(())
    }
}

fn sort_by_final(deals: &mut [Deal]) {
    deals.sort_by(|a, b| {
        let fa = a.scoring.as_ref().map(|s| s.final_score).unwrap_or(0.0);
        let fb = b.scoring.as_ref().map(|s| s.final_score).unwrap_or(0.0);
        fb.partial_cmp(&fa).unwrap_or(Ordering::Equal)
    });
}

fn sort_by_boost(deals: &mut [Deal]) {
    deals.sort_by(|a, b| {
        let fa = a.scoring.as_ref().and_then(|s| s.semantic_boost).unwrap_or(0.0);
        let fb = b.scoring.as_ref().and_then(|s| s.semantic_boost).unwrap_or(0.0);
        fb.partial_cmp(&fa).unwrap_or(Ordering::Equal)
    });
}

fn metadata(strategy: RankStrategy, count: usize, final_scores: &[f64]) -> RankingMetadata {
    RankingMetadata {
        strategy: strategy.to_string(),
        count,
        confidence: strategy.confidence(),
        score_range: ScoreRange::from_scores(final_scores),
    }
}
