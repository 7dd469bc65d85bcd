//! # dealfinder-freshness
//!
//! Pure policy component: classifies queries into categories, computes
//! optimal cache TTLs, and buckets cache-entry age into validity verdicts.
//! No I/O; fully deterministic given `(query, now, cached_at)`.

mod engine;
mod tables;

pub use engine::FreshnessEngine;
pub use tables::{MAX_DEAL_AGE_HOURS, PRICE_SENSITIVE_CAP_HOURS};
