//! Workspace configuration, loaded once at process start and injected into
//! the orchestrator. Nothing re-reads config mid-request.

mod defaults;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DealError, DealResult};

/// Verification admission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Any missing important field fails; unreachable URL force-fails.
    Strict,
    /// At most one missing important field tolerated.
    #[default]
    Moderate,
    /// Missing important fields ignored.
    Lenient,
}

impl Strictness {
    /// Minimum overall score to pass admission.
    pub fn pass_threshold(self) -> f64 {
        match self {
            Self::Strict => 75.0,
            Self::Moderate => 60.0,
            Self::Lenient => 40.0,
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Lenient => "lenient",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Strictness {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "moderate" => Ok(Self::Moderate),
            "lenient" => Ok(Self::Lenient),
            other => Err(DealError::Config {
                reason: format!("unknown strictness: {other}"),
            }),
        }
    }
}

/// Ranking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    /// Composite score only.
    Algorithmic,
    /// Semantic adjustment only.
    Semantic,
    /// Composite + semantic adjustment. Default, highest confidence.
    #[default]
    Hybrid,
}

impl RankStrategy {
    /// Self-reported confidence of the strategy's ordering.
    pub fn confidence(self) -> f64 {
        match self {
            Self::Hybrid => 0.9,
            Self::Semantic => 0.85,
            Self::Algorithmic => 0.7,
        }
    }
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Algorithmic => "algorithmic",
            Self::Semantic => "semantic",
            Self::Hybrid => "hybrid",
        };
        write!(f, "{name}")
    }
}

/// Caching subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Fallback TTL when the freshness engine is bypassed (seconds).
    pub search_ttl_secs: u64,
    /// Session persistence TTL (seconds).
    pub session_ttl_secs: u64,
    /// Bounded retry attempts on transient store errors.
    pub store_retry_attempts: u32,
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            search_ttl_secs: defaults::DEFAULT_SEARCH_TTL_SECS,
            session_ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
            store_retry_attempts: defaults::DEFAULT_STORE_RETRY_ATTEMPTS,
            enabled: true,
        }
    }
}

/// Verification subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub strictness: Strictness,
    /// Per-probe timeout (seconds).
    pub probe_timeout_secs: u64,
    /// Bounded worker pool width for reachability probes.
    pub probe_workers: usize,
    /// Whether to probe URLs at all.
    pub check_urls: bool,
    pub max_verified_results: usize,
    pub enabled: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Moderate,
            probe_timeout_secs: defaults::DEFAULT_PROBE_TIMEOUT_SECS,
            probe_workers: defaults::DEFAULT_PROBE_WORKERS,
            check_urls: true,
            max_verified_results: crate::constants::MAX_VERIFIED_RESULTS,
            enabled: true,
        }
    }
}

/// Ranking subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub strategy: RankStrategy,
    pub max_ranked_results: usize,
    pub enabled: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            strategy: RankStrategy::Hybrid,
            max_ranked_results: crate::constants::MAX_RANKED_RESULTS,
            enabled: true,
        }
    }
}

/// Search-provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: crate::constants::MAX_SEARCH_RESULTS,
        }
    }
}

/// Top-level configuration, built once per process and injected everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealfinderConfig {
    pub cache: CacheConfig,
    pub verification: VerificationConfig,
    pub ranking: RankingConfig,
    pub search: SearchConfig,
}

impl DealfinderConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> DealResult<Self> {
        toml::from_str(text).map_err(|e| DealError::Config {
            reason: e.to_string(),
        })
    }
}
