//! # dealfinder-core
//!
//! Foundation crate for the dealfinder result pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod deal;
pub mod errors;
pub mod models;
pub mod price;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DealfinderConfig;
pub use deal::{Deal, Descriptors, ScoringRecord, VerificationRecord};
pub use errors::{DealError, DealResult};
pub use models::{CacheEntry, Category, FreshnessVerdict, ProductMatch, Resolution};
