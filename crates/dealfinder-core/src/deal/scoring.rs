use serde::{Deserialize, Serialize};

/// Per-factor breakdown behind an algorithmic score, each 0-100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactorScores {
    pub price: f64,
    pub discount: f64,
    pub rating: f64,
    pub verification: f64,
    pub relevance: f64,
    pub freshness: f64,
}

/// Outcome of one ranking pass over one deal.
///
/// Invariant: `final_score == algorithmic_score + semantic_boost` when a
/// semantic pass ran, else `final_score == algorithmic_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRecord {
    /// Weighted composite of the factor scores.
    pub algorithmic_score: f64,
    pub factors: FactorScores,
    /// Bounded external adjustment in [-20, +20], when a semantic pass ran.
    pub semantic_boost: Option<f64>,
    pub semantic_reason: Option<String>,
    pub final_score: f64,
}

impl ScoringRecord {
    /// Build a record with no semantic adjustment.
    pub fn algorithmic(score: f64, factors: FactorScores) -> Self {
        Self {
            algorithmic_score: score,
            factors,
            semantic_boost: None,
            semantic_reason: None,
            final_score: score,
        }
    }

    /// Apply a bounded semantic adjustment, maintaining the final-score
    /// invariant.
    pub fn with_boost(mut self, boost: f64, reason: String) -> Self {
        let boost = boost.clamp(-20.0, 20.0);
        self.semantic_boost = Some(boost);
        self.semantic_reason = Some(reason);
        self.final_score = self.algorithmic_score + boost;
        self
    }
}
