use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Age bucket for a cached result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessLevel {
    /// Under 4 hours.
    Fresh,
    /// Under 12 hours.
    Good,
    /// Under 24 hours; still usable, carries a warning.
    Stale,
    /// 24 hours or older; never served.
    Expired,
}

impl fmt::Display for FreshnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fresh => "fresh",
            Self::Good => "good",
            Self::Stale => "stale",
            Self::Expired => "expired",
        };
        write!(f, "{name}")
    }
}

/// What the caller should do with a cache hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshAction {
    UseCache,
    ConsiderRefresh,
    RefreshRequired,
}

/// Validity verdict for one cache entry. Derived on every read, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessVerdict {
    pub age_hours: f64,
    pub category: Category,
    pub is_price_sensitive: bool,
    pub level: FreshnessLevel,
    pub action: RefreshAction,
    /// False once the 24-hour ceiling is crossed, regardless of category.
    pub valid: bool,
    pub reason: String,
    pub warning: Option<String>,
}

/// Refresh decision combining the ceiling, the category threshold, and
/// price sensitivity. Consumed by the orchestrator on every cache hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshDecision {
    pub should_refresh: bool,
    pub reason: String,
    pub age_hours: f64,
    pub level: FreshnessLevel,
    pub warning: Option<String>,
}
