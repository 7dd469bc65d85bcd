//! Semantic match fallback via the completion capability.
//!
//! The model sees the numbered product list and replies with a strict JSON
//! object; anything that fails to parse means "no semantic result" and the
//! deterministic outcome stands.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use dealfinder_core::deal::Deal;
use dealfinder_core::models::{MatchType, ProductMatch, Resolution};
use dealfinder_core::traits::ICompletion;

#[derive(Debug, Deserialize)]
struct SemanticResponse {
    #[serde(default)]
    matches: Vec<SemanticEntry>,
    #[serde(default)]
    is_ambiguous: bool,
    #[serde(default)]
    clarification: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SemanticEntry {
    result_number: u32,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
}

/// Ask the completion capability to match the query. Returns `None` on any
/// transport or parse failure, or when the model found nothing.
pub async fn resolve_via_completion(
    completion: &dyn ICompletion,
    query: &str,
    deals: &BTreeMap<u32, Deal>,
) -> Option<Resolution> {
    let prompt = build_prompt(query, deals);
    let response = completion.complete(&prompt).await.ok()?;
    let parsed = parse_response(&response)?;

    let matches: Vec<ProductMatch> = parsed
        .matches
        .into_iter()
        .filter(|entry| deals.contains_key(&entry.result_number))
        .map(|entry| ProductMatch {
            result_number: entry.result_number,
            confidence: entry.confidence.clamp(0.0, 1.0),
            reasoning: if entry.reasoning.is_empty() {
                "semantic match".to_string()
            } else {
                entry.reasoning
            },
            match_type: MatchType::Semantic,
            alternatives: Vec::new(),
        })
        .collect();

    if matches.is_empty() {
        debug!("semantic fallback produced no usable matches");
        return None;
    }

    Some(Resolution {
        matches,
        is_ambiguous: parsed.is_ambiguous,
        clarification: parsed.clarification,
    })
}

fn build_prompt(query: &str, deals: &BTreeMap<u32, Deal>) -> String {
    let listing: String = deals
        .values()
        .map(|d| {
            format!(
                "{}. {} - {} ({})\n",
                d.result_number, d.title, d.price, d.store
            )
        })
        .collect();

    format!(
        "You are a product matching assistant. Match the user's query to the most relevant product(s).\n\n\
         Available Products:\n{listing}\n\
         User Query: \"{query}\"\n\n\
         Return a JSON object with this exact shape:\n\
         {{\n\
           \"matches\": [\n\
             {{\"result_number\": <number>, \"confidence\": <0.0-1.0>, \"reasoning\": \"<why>\"}}\n\
           ],\n\
           \"is_ambiguous\": <true/false>,\n\
           \"clarification\": \"<question to ask the user if ambiguous>\"\n\
         }}\n\n\
         Rules:\n\
         - Match on product name, attributes, price, store\n\
         - If multiple products match, include all with confidence scores\n\
         - If ambiguous, set is_ambiguous=true and provide a clarification\n\
         - Be strict: only match if the query clearly refers to a product\n\
         - Return empty matches if there is no clear match"
    )
}

/// Parse the model's reply, tolerating markdown code fences around the
/// JSON body.
fn parse_response(response: &str) -> Option<SemanticResponse> {
    let trimmed = response.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(|rest| rest.trim_end_matches("```").trim())
        .unwrap_or(trimmed);
    serde_json::from_str(body).ok()
}
