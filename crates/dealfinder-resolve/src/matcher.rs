use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use dealfinder_core::deal::Deal;
use dealfinder_core::models::{MatchType, ProductMatch, Resolution};
use dealfinder_core::traits::ICompletion;

use crate::reference;
use crate::semantic;

/// Two surviving matches within this confidence band of the top match make
/// the resolution ambiguous. Tunable policy, not a load-bearing invariant.
pub const AMBIGUITY_BAND: f64 = 0.2;

/// More than this many deterministic candidates hands resolution to the
/// semantic fallback. Tunable policy.
pub const MAX_DETERMINISTIC_CANDIDATES: usize = 3;

/// Alternatives surfaced to the user when asking for clarification.
const MAX_ALTERNATIVES: usize = 3;

/// Resolves follow-up queries against the session's numbered result set.
///
/// Match strategies run in strict priority order and short-circuit on the
/// first confident outcome; the semantic fallback only sees queries the
/// deterministic strategies could not settle.
pub struct ReferenceResolver {
    completion: Option<Arc<dyn ICompletion>>,
}

impl ReferenceResolver {
    pub fn new(completion: Option<Arc<dyn ICompletion>>) -> Self {
        Self { completion }
    }

    /// Resolve a query to one or more numbered deals.
    pub async fn resolve(&self, query: &str, deals: &BTreeMap<u32, Deal>) -> Resolution {
        if deals.is_empty() {
            return Resolution::empty();
        }

        // Strategy 1: exact number references always win outright.
        let numbers = reference::detect_numbers(query);
        if !numbers.is_empty() {
            let matches: Vec<ProductMatch> = numbers
                .iter()
                .copied()
                .filter(|n| deals.contains_key(n))
                .map(|n| ProductMatch {
                    result_number: n,
                    confidence: 1.0,
                    reasoning: format!("exact number match: #{n}"),
                    match_type: MatchType::ExactNumber,
                    alternatives: Vec::new(),
                })
                .collect();
            if !matches.is_empty() {
                info!(count = matches.len(), "resolved by exact number");
                return Resolution {
                    matches,
                    is_ambiguous: false,
                    clarification: None,
                };
            }
        }

        // Strategies 2-4: deterministic heuristics.
        let mut candidates = Vec::new();
        candidates.extend(superlative_matches(query, deals));
        candidates.extend(attribute_matches(query, deals));
        candidates.extend(fuzzy_name_matches(query, deals));

        let mut merged = dedup_by_number(candidates);
        debug!(candidates = merged.len(), "deterministic candidates");

        // Strategy 5: semantic fallback, only when the deterministic pass
        // produced nothing or too much.
        if merged.is_empty() || merged.len() > MAX_DETERMINISTIC_CANDIDATES {
            if let Some(completion) = &self.completion {
                if let Some(resolution) =
                    semantic::resolve_via_completion(completion.as_ref(), query, deals).await
                {
                    info!(
                        matches = resolution.matches.len(),
                        ambiguous = resolution.is_ambiguous,
                        "resolved by semantic fallback"
                    );
                    return resolution;
                }
            }
        }

        // Ambiguity: multiple survivors within the band of the top match.
        if merged.len() > 1 {
            let top = merged[0].confidence;
            let similar: Vec<ProductMatch> = merged
                .iter()
                .filter(|m| m.confidence >= top - AMBIGUITY_BAND)
                .take(MAX_ALTERNATIVES)
                .cloned()
                .collect();

            if similar.len() > 1 {
                let clarification = build_clarification(&similar, deals);
                let alternatives: Vec<Deal> = similar
                    .iter()
                    .filter_map(|m| deals.get(&m.result_number).cloned())
                    .collect();
                let mut matches = similar;
                if let Some(first) = matches.first_mut() {
                    first.alternatives = alternatives;
                }
                return Resolution {
                    matches,
                    is_ambiguous: true,
                    clarification: Some(clarification),
                };
            }
        }

        merged.truncate(MAX_ALTERNATIVES);
        Resolution {
            matches: merged,
            is_ambiguous: false,
            clarification: None,
        }
    }
}

/// Strategy 2: "cheapest" / "most expensive" pick the extremum by parsed
/// price among deals with a resolvable price.
fn superlative_matches(query: &str, deals: &BTreeMap<u32, Deal>) -> Vec<ProductMatch> {
    let query_lower = query.to_lowercase();
    let mut matches = Vec::new();

    let priced: Vec<(&u32, &Deal, f64)> = deals
        .iter()
        .filter_map(|(n, d)| d.price_value().map(|p| (n, d, p)))
        .collect();
    if priced.is_empty() {
        return matches;
    }

    let wants_cheapest = ["cheapest", "lowest price", "most affordable"]
        .iter()
        .any(|kw| query_lower.contains(kw));
    if wants_cheapest {
        if let Some((n, d, _)) = priced
            .iter()
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal))
        {
            matches.push(ProductMatch {
                result_number: **n,
                confidence: 0.9,
                reasoning: format!("lowest price: {}", d.price),
                match_type: MatchType::Description,
                alternatives: Vec::new(),
            });
        }
    }

    let wants_priciest = ["most expensive", "highest price", "premium"]
        .iter()
        .any(|kw| query_lower.contains(kw));
    if wants_priciest {
        if let Some((n, d, _)) = priced
            .iter()
            .max_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal))
        {
            matches.push(ProductMatch {
                result_number: **n,
                confidence: 0.9,
                reasoning: format!("highest price: {}", d.price),
                match_type: MatchType::Description,
                alternatives: Vec::new(),
            });
        }
    }

    matches
}

/// Strategy 3: store and descriptor values matched as substrings of the
/// query.
fn attribute_matches(query: &str, deals: &BTreeMap<u32, Deal>) -> Vec<ProductMatch> {
    let query_lower = query.to_lowercase();
    let mut matches = Vec::new();

    for (number, deal) in deals {
        let store = deal.store.to_lowercase();
        if !store.is_empty() && store != "unknown store" && query_lower.contains(&store) {
            matches.push(ProductMatch {
                result_number: *number,
                confidence: 0.85,
                reasoning: format!("store match: {}", deal.store),
                match_type: MatchType::Attribute,
                alternatives: Vec::new(),
            });
        }

        if let Some(color) = &deal.descriptors.color {
            if query_lower.contains(&color.to_lowercase()) {
                matches.push(ProductMatch {
                    result_number: *number,
                    confidence: 0.8,
                    reasoning: format!("color match: {color}"),
                    match_type: MatchType::Attribute,
                    alternatives: Vec::new(),
                });
            }
        }

        if let Some(storage) = &deal.descriptors.storage {
            if query_lower.contains(&storage.to_lowercase()) {
                matches.push(ProductMatch {
                    result_number: *number,
                    confidence: 0.8,
                    reasoning: format!("storage match: {storage}"),
                    match_type: MatchType::Attribute,
                    alternatives: Vec::new(),
                });
            }
        }
    }

    matches
}

/// Strategy 4: fuzzy name match over clean name, title, and keywords.
/// Candidates need a score above 0.3 to be considered at all.
fn fuzzy_name_matches(query: &str, deals: &BTreeMap<u32, Deal>) -> Vec<ProductMatch> {
    let query_lower = query.to_lowercase();
    let query_words: Vec<&str> = query_lower.split_whitespace().collect();
    let mut matches = Vec::new();

    for (number, deal) in deals {
        let clean_name = deal.clean_name.to_lowercase();
        let title = deal.title.to_lowercase();
        let title_words: Vec<&str> = title.split_whitespace().collect();

        let mut score = 0.0f64;
        let mut reasons = Vec::new();

        if !clean_name.is_empty()
            && (query_lower.contains(&clean_name) || clean_name.contains(&query_lower))
        {
            score += 0.9;
            reasons.push("name match".to_string());
        } else if query_lower.contains(&title)
            || query_words.iter().any(|w| title_words.contains(w))
        {
            score += 0.7;
            reasons.push("title partial match".to_string());
        }

        if !query_words.is_empty() {
            let keyword_hits = deal
                .keywords
                .iter()
                .filter(|kw| query_words.contains(&kw.as_str()))
                .count();
            if keyword_hits > 0 {
                score += 0.3 * (keyword_hits as f64 / query_words.len() as f64);
                reasons.push(format!("{keyword_hits} keyword matches"));
            }
        }

        if score > 0.3 {
            matches.push(ProductMatch {
                result_number: *number,
                confidence: score.min(0.95),
                reasoning: reasons.join(", "),
                match_type: MatchType::Name,
                alternatives: Vec::new(),
            });
        }
    }

    matches
}

/// Deduplicate by result number, keeping the highest-confidence record,
/// sorted by confidence descending (number ascending on ties).
fn dedup_by_number(candidates: Vec<ProductMatch>) -> Vec<ProductMatch> {
    let mut best: BTreeMap<u32, ProductMatch> = BTreeMap::new();
    for candidate in candidates {
        match best.get(&candidate.result_number) {
            Some(existing) if existing.confidence >= candidate.confidence => {}
            _ => {
                best.insert(candidate.result_number, candidate);
            }
        }
    }
    let mut merged: Vec<ProductMatch> = best.into_values().collect();
    merged.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.result_number.cmp(&b.result_number))
    });
    merged
}

fn build_clarification(similar: &[ProductMatch], deals: &BTreeMap<u32, Deal>) -> String {
    let mut text = String::from("I found multiple matches. Did you mean:\n");
    for m in similar.iter().take(MAX_ALTERNATIVES) {
        if let Some(deal) = deals.get(&m.result_number) {
            text.push_str(&format!("#{}: {} ({})\n", m.result_number, deal.title, deal.price));
        }
    }
    text
}
