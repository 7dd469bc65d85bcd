use serde::{Deserialize, Serialize};

/// Aggregate outcome of one verification pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total_input: usize,
    pub verified_count: usize,
    pub filtered_count: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub strictness: String,
}

/// Min/max/avg over the final scores of a ranked set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl ScoreRange {
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        Self { min, max, avg }
    }
}

/// Aggregate outcome of one ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub strategy: String,
    pub count: usize,
    /// Self-reported confidence: 0.9 hybrid, 0.85 semantic, 0.7 algorithmic.
    pub confidence: f64,
    pub score_range: ScoreRange,
}
