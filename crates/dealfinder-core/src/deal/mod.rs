//! The Deal entity and its sub-records.

mod base;
mod descriptors;
mod scoring;
mod verification;

pub use base::Deal;
pub use descriptors::{Condition, Descriptors, PriceTier};
pub use scoring::{FactorScores, ScoringRecord};
pub use verification::VerificationRecord;
