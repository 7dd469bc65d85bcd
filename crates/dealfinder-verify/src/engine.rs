use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use dealfinder_core::config::{Strictness, VerificationConfig};
use dealfinder_core::deal::{Deal, VerificationRecord};
use dealfinder_core::models::VerificationSummary;
use dealfinder_core::traits::{IUrlProber, ProbeVerdict};

use crate::{completeness, relevance};

/// The verification engine. Probes run concurrently in a bounded pool;
/// score computation is pure and order-preserving.
pub struct VerificationEngine {
    config: VerificationConfig,
    prober: Arc<dyn IUrlProber>,
}

impl VerificationEngine {
    pub fn new(config: VerificationConfig, prober: Arc<dyn IUrlProber>) -> Self {
        Self { config, prober }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Verify a batch against the query.
    ///
    /// Returns the passing deals (input order preserved, capped at the
    /// configured maximum) and a summary over every assessed deal. Never
    /// fails: individual probe failures become unreachable verdicts, and
    /// the caller can fall back to [`VerificationEngine::accept_all`] if
    /// verification itself must be bypassed.
    pub async fn verify_batch(
        &self,
        deals: &[Deal],
        query: &str,
    ) -> (Vec<Deal>, VerificationSummary) {
        let verdicts = self.probe_all(deals).await;

        let mut passing = Vec::new();
        let mut scores = Vec::new();
        let mut filtered = 0usize;

        for (deal, verdict) in deals.iter().zip(verdicts) {
            let (verified_deal, passed, score) = self.verify_single(deal, query, verdict);
            scores.push(score);
            if passed {
                passing.push(verified_deal);
            } else {
                filtered += 1;
            }
        }

        // Truncation happens by pre-existing order, not by score.
        passing.truncate(self.config.max_verified_results);

        let summary = summarize(deals.len(), passing.len(), filtered, &scores, self.config.strictness);
        info!(
            verified = summary.verified_count,
            total = summary.total_input,
            filtered = summary.filtered_count,
            strictness = %self.config.strictness,
            "verification complete"
        );

        (passing, summary)
    }

    /// Degraded path: accept the raw deals up to the cap, unscored. Used
    /// when the verification pass itself cannot run.
    pub fn accept_all(&self, deals: &[Deal]) -> (Vec<Deal>, VerificationSummary) {
        let mut accepted = deals.to_vec();
        accepted.truncate(self.config.max_verified_results);
        let summary = summarize(deals.len(), accepted.len(), 0, &[], self.config.strictness);
        (accepted, summary)
    }

    /// Score and admit one deal given its probe verdict.
    fn verify_single(
        &self,
        deal: &Deal,
        query: &str,
        verdict: Option<ProbeVerdict>,
    ) -> (Deal, bool, f64) {
        let report = completeness::assess(deal);
        let strictness = self.config.strictness;

        let (url_valid, url_reason) = match &verdict {
            Some(v) => (v.valid, v.reason.clone()),
            None => (true, "URL not checked".to_string()),
        };

        let relevance_score = relevance::score(deal, query);
        let overall = report.score * 0.4 + relevance_score * 0.6;

        let failure = if !report.required_ok {
            Some(format!(
                "missing required fields: {}",
                report.missing_required.join(", ")
            ))
        } else if strictness == Strictness::Strict && !report.missing_important.is_empty() {
            Some(format!(
                "missing important fields: {}",
                report.missing_important.join(", ")
            ))
        } else if strictness == Strictness::Moderate && report.missing_important.len() > 1 {
            Some(format!(
                "too many missing fields: {}",
                report.missing_important.join(", ")
            ))
        } else if strictness == Strictness::Strict && !url_valid {
            Some(format!("URL invalid: {url_reason}"))
        } else if overall < strictness.pass_threshold() {
            Some(format!(
                "score {overall:.1} below threshold {:.0}",
                strictness.pass_threshold()
            ))
        } else {
            None
        };

        let passed = failure.is_none();
        let record = VerificationRecord {
            verified: passed,
            completeness_score: report.score,
            relevance_score,
            overall_score: overall,
            url_valid,
            reason: failure.unwrap_or_else(|| "Passed verification".to_string()),
        };

        let mut verified_deal = deal.clone();
        verified_deal.verification = Some(record);
        (verified_deal, passed, overall)
    }

    /// Probe every deal's URL concurrently, bounded by the worker pool.
    /// Results are reassembled in input order; a slow probe for one deal
    /// never blocks the others past its own timeout.
    async fn probe_all(&self, deals: &[Deal]) -> Vec<Option<ProbeVerdict>> {
        if !self.config.check_urls {
            return vec![None; deals.len()];
        }

        let semaphore = Arc::new(Semaphore::new(self.config.probe_workers.max(1)));
        let mut tasks = JoinSet::new();

        for (idx, deal) in deals.iter().enumerate() {
            if deal.url.is_empty() {
                continue;
            }
            let prober = Arc::clone(&self.prober);
            let semaphore = Arc::clone(&semaphore);
            let url = deal.url.clone();
            tasks.spawn(async move {
                // Closed-semaphore errors cannot happen: we never close it.
                let _permit = semaphore.acquire_owned().await;
                (idx, prober.probe(&url).await)
            });
        }

        let mut verdicts: Vec<Option<ProbeVerdict>> = vec![None; deals.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, verdict)) => verdicts[idx] = Some(verdict),
                Err(err) => {
                    warn!(error = %err, "reachability probe task failed");
                }
            }
        }
        verdicts
    }
}

fn summarize(
    total: usize,
    verified: usize,
    filtered: usize,
    scores: &[f64],
    strictness: Strictness,
) -> VerificationSummary {
    let (average, min, max) = if scores.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (
            scores.iter().sum::<f64>() / scores.len() as f64,
            scores.iter().cloned().fold(f64::INFINITY, f64::min),
            scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        )
    };

    VerificationSummary {
        total_input: total,
        verified_count: verified,
        filtered_count: filtered,
        average_score: average,
        min_score: min,
        max_score: max,
        strictness: strictness.to_string(),
    }
}
