use serde::{Deserialize, Serialize};

/// Outcome of one verification pass over one deal.
///
/// Created once per pass and never mutated afterward; re-verifying a deal
/// replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Whether the deal passed admission for the strictness in effect.
    pub verified: bool,
    /// Present-fields ratio, 0-100.
    pub completeness_score: f64,
    /// Query/content relevance, 0-100.
    pub relevance_score: f64,
    /// 0.4 x completeness + 0.6 x relevance.
    pub overall_score: f64,
    /// Whether the reachability probe succeeded (or was skipped).
    pub url_valid: bool,
    /// Human-readable pass/fail reason.
    pub reason: String,
}
