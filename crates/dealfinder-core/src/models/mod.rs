//! Cross-crate value types that are not part of the Deal entity itself.

mod cache_entry;
mod category;
mod freshness;
mod preferences;
mod product_match;
mod raw_batch;
mod summary;
mod turn_report;

pub use cache_entry::CacheEntry;
pub use category::Category;
pub use freshness::{FreshnessLevel, FreshnessVerdict, RefreshAction, RefreshDecision};
pub use preferences::UserPreferences;
pub use product_match::{MatchType, ProductMatch, Resolution};
pub use raw_batch::{RawBatch, RawSearchItem, SearchFilters};
pub use summary::{RankingMetadata, ScoreRange, VerificationSummary};
pub use turn_report::{Stage, StageError, StageState, StageStatus, TurnReport};
