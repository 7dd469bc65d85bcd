use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deal::Deal;

/// Pipeline stage names, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    CacheLookup,
    Search,
    Normalize,
    Verify,
    Rank,
    CacheWrite,
    Synthesize,
    Resolve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CacheLookup => "cache_lookup",
            Self::Search => "search",
            Self::Normalize => "normalize",
            Self::Verify => "verify",
            Self::Rank => "rank",
            Self::CacheWrite => "cache_write",
            Self::Synthesize => "synthesize",
            Self::Resolve => "resolve",
        };
        write!(f, "{name}")
    }
}

/// How a stage finished. `Degraded` means the stage produced usable output
/// through its fallback path; `Skipped` means the cache short-circuit (or a
/// feature flag) made the stage unnecessary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Completed,
    Degraded,
    Skipped,
    Failed,
}

/// One entry in the per-turn status trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageStatus {
    pub stage: Stage,
    pub state: StageState,
}

/// One entry in the per-turn error log. Stages convert their internal
/// failures into these records instead of raising.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageError {
    pub stage: Stage,
    pub message: String,
}

/// Everything a turn produces. The orchestrator always returns one of
/// these; nothing raises past its boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    pub final_answer: String,
    pub ranked_deals: Vec<Deal>,
    pub status_trace: Vec<StageStatus>,
    pub errors: Vec<StageError>,
    pub cache_hit: bool,
    /// Freshness warning carried through from a served-but-aging hit.
    pub freshness_warning: Option<String>,
}
