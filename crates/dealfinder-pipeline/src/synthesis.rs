//! Deterministic answer formatting from verified facts.
//!
//! Natural-language generation quality is out of scope; the final answer
//! is a plain rendering of the ranked set and per-deal fact sheets, which
//! keeps every statement traceable to a Deal field.

use dealfinder_core::deal::Deal;
use dealfinder_core::models::ProductMatch;

/// Render the ranked set as the turn's final answer.
pub fn compose_results(query: &str, deals: &[Deal], freshness_warning: Option<&str>) -> String {
    if deals.is_empty() {
        return no_results_message(query);
    }

    let mut out = format!("Here are the top deals for \"{query}\":\n");
    for deal in deals {
        let rating = deal
            .rating
            .map(|r| format!(", rated {r}/5"))
            .unwrap_or_default();
        let discount = deal
            .discount
            .as_deref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        out.push_str(&format!(
            "#{}: {} - {} at {}{rating}{discount}\n    {}\n",
            deal.result_number, deal.title, deal.price, deal.store, deal.url
        ));
    }

    if let Some(warning) = freshness_warning {
        out.push_str(&format!("\nNote: {warning}\n"));
    }

    out.push_str("\nAsk about any item by number (e.g. \"#1\") or description.");
    out
}

/// The only user-visible failure message: total absence of data at
/// synthesis.
pub fn no_results_message(query: &str) -> String {
    format!(
        "I couldn't find any current deals for \"{query}\". \
         Try rephrasing the search or asking again later."
    )
}

/// Render a fact-grounded answer about one resolved deal.
pub fn answer_for_deal(deal: &Deal, matched: &ProductMatch, fact_sheet: &str) -> String {
    let mut out = String::new();

    if matched.confidence < 0.7 {
        out.push_str(&format!(
            "Note: match confidence {:.0}% - please verify this is the product you meant.\n\n",
            matched.confidence * 100.0
        ));
    }

    out.push_str(&format!("#{}: {}\n{fact_sheet}", deal.result_number, deal.title));

    if !matched.alternatives.is_empty() {
        out.push_str("\n\nDid you mean one of these instead?\n");
        for alt in matched.alternatives.iter().take(3) {
            out.push_str(&format!("- #{}: {}\n", alt.result_number, alt.clean_name));
        }
    }

    out
}
