use chrono::Utc;
use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;
use tracing::{info, warn};

use dealfinder_cache::ResultCache;
use dealfinder_core::config::DealfinderConfig;
use dealfinder_core::models::{
    RawBatch, RefreshAction, SearchFilters, Stage, StageError, StageState, StageStatus,
    TurnReport, UserPreferences,
};
use dealfinder_core::traits::{ICacheStore, ICompletion, ISearchProvider, IUrlProber};
use dealfinder_freshness::FreshnessEngine;
use dealfinder_normalize::Normalizer;
use dealfinder_rank::RerankEngine;
use dealfinder_resolve::{FactVerifier, ReferenceResolver};
use dealfinder_session::SessionManager;
use dealfinder_verify::VerificationEngine;

use crate::synthesis;

static RE_BUDGET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:under|below|less than)\s+\$?([0-9,]+)").ok());

/// The pipeline orchestrator. All collaborators are injected once at
/// construction; nothing is re-created mid-request.
pub struct Orchestrator {
    config: DealfinderConfig,
    provider: Arc<dyn ISearchProvider>,
    freshness: FreshnessEngine,
    cache: ResultCache,
    normalizer: Normalizer,
    verifier: VerificationEngine,
    reranker: RerankEngine,
    resolver: ReferenceResolver,
    facts: FactVerifier,
    sessions: SessionManager,
}

impl Orchestrator {
    pub fn new(
        config: DealfinderConfig,
        store: Arc<dyn ICacheStore>,
        provider: Arc<dyn ISearchProvider>,
        completion: Option<Arc<dyn ICompletion>>,
        prober: Arc<dyn IUrlProber>,
    ) -> Self {
        let cache = ResultCache::new(Arc::clone(&store), config.cache.store_retry_attempts);
        let verifier = VerificationEngine::new(config.verification.clone(), prober);
        let reranker = RerankEngine::new(config.ranking.clone(), completion.clone());
        let resolver = ReferenceResolver::new(completion);
        let sessions = SessionManager::new(store, config.cache.session_ttl_secs);

        Self {
            config,
            provider,
            freshness: FreshnessEngine::new(),
            cache,
            normalizer: Normalizer::new(),
            verifier,
            reranker,
            resolver,
            facts: FactVerifier::new(),
            sessions,
        }
    }

    /// Run one full search turn. Always completes: every stage failure is
    /// converted into a degraded output plus an error-log record.
    pub async fn handle_turn(&self, session_id: &str, user_message: &str) -> TurnReport {
        let query = user_message.trim();
        let preferences = parse_preferences(query);
        let filters = SearchFilters {
            category: None,
            max_price: preferences.max_price,
        };

        let mut trace: Vec<StageStatus> = Vec::new();
        let mut errors: Vec<StageError> = Vec::new();
        let mut session = self.sessions.load_or_create(session_id).await;
        session.touch();

        // Stage 1: cache lookup, re-validated against the freshness
        // ceiling before the hit is trusted.
        if let Some(report) = self
            .try_cache_hit(query, &filters, &mut trace, &mut errors)
            .await
        {
            session.record_results(query, &report.ranked_deals);
            if let Err(err) = self.sessions.save(session).await {
                warn!(error = %err, "session save failed after cache hit");
            }
            return report;
        }

        // Stage 2: provider fetch.
        let batch = match self.provider.search(query, &filters).await {
            Ok(batch) => {
                mark(&mut trace, Stage::Search, StageState::Completed);
                Some(batch)
            }
            Err(err) => {
                errors.push(StageError {
                    stage: Stage::Search,
                    message: err.to_string(),
                });
                mark(&mut trace, Stage::Search, StageState::Failed);
                None
            }
        };

        // Stage 3: normalize. An unstructured batch is the degraded path.
        let deals = match batch {
            Some(batch) => {
                let degraded = matches!(batch, RawBatch::Unstructured(_));
                let mut deals = self.normalizer.normalize(batch);
                deals.truncate(self.config.search.max_results);
                mark(
                    &mut trace,
                    Stage::Normalize,
                    if degraded {
                        StageState::Degraded
                    } else {
                        StageState::Completed
                    },
                );
                deals
            }
            None => {
                mark(&mut trace, Stage::Normalize, StageState::Skipped);
                Vec::new()
            }
        };

        // Stage 4: verification.
        let verified = if deals.is_empty() {
            mark(&mut trace, Stage::Verify, StageState::Skipped);
            Vec::new()
        } else if self.config.verification.enabled {
            let (passing, summary) = self.verifier.verify_batch(&deals, query).await;
            info!(
                verified = summary.verified_count,
                filtered = summary.filtered_count,
                "verification stage done"
            );
            mark(&mut trace, Stage::Verify, StageState::Completed);
            passing
        } else {
            let (accepted, _) = self.verifier.accept_all(&deals);
            mark(&mut trace, Stage::Verify, StageState::Skipped);
            accepted
        };

        // Stage 5: ranking.
        let ranked = if verified.is_empty() {
            mark(&mut trace, Stage::Rank, StageState::Skipped);
            Vec::new()
        } else if self.config.ranking.enabled {
            let (ranked, _meta, degradation) = self
                .reranker
                .rerank(&verified, query, &preferences, self.config.ranking.strategy)
                .await;
            match degradation {
                Some(err) => {
                    errors.push(StageError {
                        stage: Stage::Rank,
                        message: err.to_string(),
                    });
                    mark(&mut trace, Stage::Rank, StageState::Degraded);
                }
                None => mark(&mut trace, Stage::Rank, StageState::Completed),
            }
            ranked
        } else {
            let mut passthrough = verified.clone();
            passthrough.truncate(self.config.ranking.max_ranked_results);
            mark(&mut trace, Stage::Rank, StageState::Skipped);
            passthrough
        };

        // Stage 6: cache write-back under the freshness engine's TTL.
        if self.config.cache.enabled && !ranked.is_empty() {
            let ttl = self.freshness.optimal_ttl(query, None);
            match self.cache.put(query, &filters, ranked.clone(), ttl).await {
                Ok(()) => mark(&mut trace, Stage::CacheWrite, StageState::Completed),
                Err(err) => {
                    errors.push(StageError {
                        stage: Stage::CacheWrite,
                        message: err.to_string(),
                    });
                    mark(&mut trace, Stage::CacheWrite, StageState::Degraded);
                }
            }
        } else {
            mark(&mut trace, Stage::CacheWrite, StageState::Skipped);
        }

        // Stage 7: session refresh + synthesis.
        session.record_results(query, &ranked);
        if let Err(err) = self.sessions.save(session).await {
            warn!(error = %err, "session save failed");
        }

        let final_answer = synthesis::compose_results(query, &ranked, None);
        mark(&mut trace, Stage::Synthesize, StageState::Completed);

        TurnReport {
            final_answer,
            ranked_deals: ranked,
            status_trace: trace,
            errors,
            cache_hit: false,
            freshness_warning: None,
        }
    }

    /// Answer a follow-up about a previously returned deal, fact-checked
    /// against the session's numbered result set.
    pub async fn answer_follow_up(&self, session_id: &str, user_message: &str) -> String {
        let session = self.sessions.load_or_create(session_id).await;
        if !session.has_results() {
            return "I don't have previous results to refer to - run a search first.".to_string();
        }

        let resolution = self
            .resolver
            .resolve(user_message, &session.numbered_results)
            .await;

        if resolution.is_ambiguous {
            return resolution
                .clarification
                .unwrap_or_else(|| "I found several possible matches - which one did you mean?".to_string());
        }

        let Some(matched) = resolution.committed().cloned() else {
            return "I couldn't match that to any of the deals I showed you. \
                    Try the item number, e.g. \"#1\"."
                .to_string();
        };

        let Some(deal) = session.numbered_results.get(&matched.result_number) else {
            return "That item is no longer in the current result set.".to_string();
        };

        let fact_sheet = self.facts.fact_sheet(deal);
        let answer = synthesis::answer_for_deal(deal, &matched, &fact_sheet);

        // Every statement in the answer is rendered from Deal fields, so
        // this holds; the check still runs as a guardrail and falls back
        // to the bare fact sheet on a mismatch.
        let report = self.facts.validate_narrative(&answer, deal);
        if report.passes {
            answer
        } else {
            warn!(issues = report.issues.len(), "narrative failed fact validation");
            fact_sheet
        }
    }

    /// Serve a valid cache hit, short-circuiting the fetch stages.
    async fn try_cache_hit(
        &self,
        query: &str,
        filters: &SearchFilters,
        trace: &mut Vec<StageStatus>,
        errors: &mut Vec<StageError>,
    ) -> Option<TurnReport> {
        if !self.config.cache.enabled {
            mark(trace, Stage::CacheLookup, StageState::Skipped);
            return None;
        }

        let entry = match self.cache.get(query, filters).await {
            Ok(entry) => entry,
            Err(err) => {
                errors.push(StageError {
                    stage: Stage::CacheLookup,
                    message: err.to_string(),
                });
                mark(trace, Stage::CacheLookup, StageState::Degraded);
                return None;
            }
        };

        let Some(entry) = entry else {
            mark(trace, Stage::CacheLookup, StageState::Completed);
            return None;
        };

        // The store TTL and the freshness ceiling are set independently;
        // always re-validate before trusting the hit.
        let verdict = self.freshness.check_validity(&entry, Utc::now());
        if !verdict.valid || verdict.action == RefreshAction::RefreshRequired {
            info!(age_hours = verdict.age_hours, "cache hit expired by freshness policy");
            mark(trace, Stage::CacheLookup, StageState::Completed);
            return None;
        }

        let mut ranked = entry.results;
        ranked.truncate(self.config.ranking.max_ranked_results);

        mark(trace, Stage::CacheLookup, StageState::Completed);
        for stage in [Stage::Search, Stage::Normalize, Stage::Verify, Stage::Rank, Stage::CacheWrite] {
            mark(trace, stage, StageState::Skipped);
        }

        let final_answer = synthesis::compose_results(query, &ranked, verdict.warning.as_deref());
        mark(trace, Stage::Synthesize, StageState::Completed);

        info!(
            results = ranked.len(),
            age_hours = verdict.age_hours,
            "served from cache"
        );

        Some(TurnReport {
            final_answer,
            ranked_deals: ranked,
            status_trace: std::mem::take(trace),
            errors: std::mem::take(errors),
            cache_hit: true,
            freshness_warning: verdict.warning,
        })
    }
}

/// Lift an explicit budget ("under $500") out of the query.
fn parse_preferences(query: &str) -> UserPreferences {
    let max_price = RE_BUDGET.as_ref().and_then(|re| {
        re.captures(query)
            .and_then(|caps| caps[1].replace(',', "").parse::<f64>().ok())
    });
    UserPreferences { max_price }
}

fn mark(trace: &mut Vec<StageStatus>, stage: Stage, state: StageState) {
    trace.push(StageStatus { stage, state });
}
