//! Bounded semantic adjustment via the completion capability.
//!
//! The model sees a numbered summary of the current order and replies one
//! line per item in a strict format; anything that does not parse is
//! ignored. A fully unparsable response means "no adjustment produced",
//! never an error.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use dealfinder_core::deal::Deal;

/// Hard bound on any single adjustment.
pub const MAX_BOOST: f64 = 20.0;

static RE_ADJUSTMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(\d+)\.\s*Boost:\s*([+-]?\d+)\s*,\s*Reason:\s*(.+)$").ok());

/// One parsed adjustment: zero-based index into the scored list, bounded
/// boost, one-line reasoning.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub index: usize,
    pub boost: f64,
    pub reason: String,
}

/// Build the adjustment prompt from the current algorithmic order.
pub fn build_prompt(deals: &[Deal], query: &str, top_k: usize) -> String {
    let summary: String = deals
        .iter()
        .take(top_k)
        .enumerate()
        .map(|(i, d)| {
            format!(
                "{}. {} - {} (Store: {}, Score: {:.1})\n",
                i + 1,
                d.title,
                d.price,
                d.store,
                d.scoring.as_ref().map(|s| s.algorithmic_score).unwrap_or(0.0),
            )
        })
        .collect();

    format!(
        "You are a shopping assistant helping rank product deals based on user intent.\n\n\
         User Query: \"{query}\"\n\n\
         Current Top Results (ranked algorithmically):\n{summary}\n\
         Analyze the user's query to understand their intent and preferences. For each result, provide:\n\
         1. A semantic relevance boost score (+/- 20 points)\n\
         2. Brief reasoning (one sentence)\n\n\
         Consider:\n\
         - Product type match with query\n\
         - Brand preferences implied in query\n\
         - Feature requirements mentioned\n\
         - Value proposition (price vs quality)\n\n\
         Respond in this exact format for each result:\n\
         1. Boost: [number], Reason: [reason]\n\
         2. Boost: [number], Reason: [reason]\n\
         ...\n\n\
         Keep boosts between -20 and +20."
    )
}

/// Parse a completion into adjustments. Unparsable lines are skipped;
/// boosts are clamped to the contract bounds.
pub fn parse_adjustments(response: &str) -> Vec<Adjustment> {
    let Some(re) = RE_ADJUSTMENT.as_ref() else {
        return Vec::new();
    };

    let adjustments: Vec<Adjustment> = re
        .captures_iter(response)
        .filter_map(|caps| {
            let one_based: usize = caps.get(1)?.as_str().parse().ok()?;
            let boost: f64 = caps.get(2)?.as_str().parse().ok()?;
            Some(Adjustment {
                index: one_based.checked_sub(1)?,
                boost: boost.clamp(-MAX_BOOST, MAX_BOOST),
                reason: caps.get(3)?.as_str().trim().to_string(),
            })
        })
        .collect();

    debug!(count = adjustments.len(), "parsed semantic adjustments");
    adjustments
}
