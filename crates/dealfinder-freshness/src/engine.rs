use chrono::{DateTime, Utc};
use tracing::debug;

use dealfinder_core::models::{
    CacheEntry, Category, FreshnessLevel, FreshnessVerdict, RefreshAction, RefreshDecision,
};

use crate::tables::{
    self, FRESH_THRESHOLD_HOURS, GOOD_THRESHOLD_HOURS, MAX_DEAL_AGE_HOURS,
    PRICE_SENSITIVE_CAP_HOURS,
};

/// The freshness policy engine. Stateless; every method is a pure function
/// of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshnessEngine;

impl FreshnessEngine {
    pub fn new() -> Self {
        Self
    }

    /// First-match keyword classification across the fixed category tables.
    pub fn classify(&self, query: &str) -> Category {
        let query_lower = query.to_lowercase();
        for (category, keywords) in tables::CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| query_lower.contains(kw)) {
                return *category;
            }
        }
        Category::Default
    }

    /// Substring test against the fixed price-sensitive phrase list.
    pub fn is_price_sensitive(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        tables::PRICE_SENSITIVE_PHRASES
            .iter()
            .any(|phrase| query_lower.contains(phrase))
    }

    /// Optimal cache TTL in seconds for this query.
    ///
    /// Price-sensitive queries are capped at the 4-hour tier regardless of
    /// category; nothing ever exceeds 24 hours.
    pub fn optimal_ttl(&self, query: &str, category: Option<Category>) -> u64 {
        let category = category.unwrap_or_else(|| self.classify(query));
        let mut hours = tables::ttl_hours(category);
        if self.is_price_sensitive(query) {
            hours = hours.min(PRICE_SENSITIVE_CAP_HOURS);
        }
        debug!(%category, hours, "computed optimal TTL");
        hours * 3600
    }

    /// Bucket a cache entry's age into a validity verdict.
    ///
    /// The 24-hour ceiling always dominates: past it the entry is invalid
    /// no matter what the category TTL says. Below the ceiling the entry
    /// stays valid; crossing the effective category threshold only
    /// downgrades the action to `ConsiderRefresh`.
    pub fn check_validity(&self, entry: &CacheEntry, now: DateTime<Utc>) -> FreshnessVerdict {
        let age_hours = entry.age_hours(now);
        let category = self.classify(&entry.query);
        let is_price_sensitive = self.is_price_sensitive(&entry.query);
        let threshold = self.effective_threshold_hours(category, is_price_sensitive);
        let level = level_for_age(age_hours);

        if age_hours >= MAX_DEAL_AGE_HOURS {
            return FreshnessVerdict {
                age_hours,
                category,
                is_price_sensitive,
                level: FreshnessLevel::Expired,
                action: RefreshAction::RefreshRequired,
                valid: false,
                reason: format!(
                    "deals are {age_hours:.1}h old (exceeds {MAX_DEAL_AGE_HOURS:.0}h limit)"
                ),
                warning: Some("these deals may no longer be available or prices may have changed".to_string()),
            };
        }

        if age_hours >= threshold {
            return FreshnessVerdict {
                age_hours,
                category,
                is_price_sensitive,
                level,
                action: RefreshAction::ConsiderRefresh,
                valid: true,
                reason: format!(
                    "deals are {age_hours:.1}h old, past the {category} threshold ({threshold:.0}h)"
                ),
                warning: Some(format!("these deals are {} hours old", age_hours as u64)),
            };
        }

        let warning = match level {
            FreshnessLevel::Stale => Some(format!("deals are {} hours old", age_hours as u64)),
            _ => None,
        };

        FreshnessVerdict {
            age_hours,
            category,
            is_price_sensitive,
            level,
            action: RefreshAction::UseCache,
            valid: true,
            reason: format!("deals are {level} ({age_hours:.1}h old)"),
            warning,
        }
    }

    /// Full refresh decision for a cache hit: ceiling first, then category
    /// threshold, then the fresh/good/stale buckets.
    pub fn should_refresh(
        &self,
        entry: &CacheEntry,
        query: &str,
        category: Option<Category>,
        now: DateTime<Utc>,
    ) -> RefreshDecision {
        let age_hours = entry.age_hours(now);
        let category = category.unwrap_or_else(|| self.classify(query));
        let is_price_sensitive = self.is_price_sensitive(query);
        let threshold = self.effective_threshold_hours(category, is_price_sensitive);
        let level = level_for_age(age_hours);

        if age_hours >= MAX_DEAL_AGE_HOURS {
            return RefreshDecision {
                should_refresh: true,
                reason: format!(
                    "deals are {age_hours:.1} hours old (max: {MAX_DEAL_AGE_HOURS:.0}h)"
                ),
                age_hours,
                level: FreshnessLevel::Expired,
                warning: Some("these deals may no longer be available".to_string()),
            };
        }

        if age_hours >= threshold {
            return RefreshDecision {
                should_refresh: true,
                reason: format!(
                    "category '{category}' threshold exceeded ({age_hours:.1}h > {threshold:.0}h)"
                ),
                age_hours,
                level,
                warning: Some(format!("consider refreshing for current {category} deals")),
            };
        }

        let (reason, warning) = match level {
            FreshnessLevel::Stale => (
                "stale but within category threshold".to_string(),
                Some(format!("deals are {} hours old", age_hours as u64)),
            ),
            FreshnessLevel::Good => ("good quality deals".to_string(), None),
            _ => ("fresh deals".to_string(), None),
        };

        RefreshDecision {
            should_refresh: false,
            reason,
            age_hours,
            level,
            warning,
        }
    }

    fn effective_threshold_hours(&self, category: Category, is_price_sensitive: bool) -> f64 {
        let mut hours = tables::ttl_hours(category);
        if is_price_sensitive {
            hours = hours.min(PRICE_SENSITIVE_CAP_HOURS);
        }
        hours as f64
    }
}

fn level_for_age(age_hours: f64) -> FreshnessLevel {
    if age_hours < FRESH_THRESHOLD_HOURS {
        FreshnessLevel::Fresh
    } else if age_hours < GOOD_THRESHOLD_HOURS {
        FreshnessLevel::Good
    } else if age_hours < MAX_DEAL_AGE_HOURS {
        FreshnessLevel::Stale
    } else {
        FreshnessLevel::Expired
    }
}
