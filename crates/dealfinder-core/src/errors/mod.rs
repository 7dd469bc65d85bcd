//! Error taxonomy for the pipeline.
//!
//! One enum per subsystem; `DealError` is the umbrella the orchestrator
//! sees. Resolution ambiguity and fact mismatches are *values*, not errors
//! (they are valid terminal states), so they live in `models`, not here.

mod provider_error;
mod ranking_error;
mod store_error;
mod verification_error;

pub use provider_error::ProviderError;
pub use ranking_error::RankingError;
pub use store_error::StoreError;
pub use verification_error::VerificationError;

/// Umbrella error for the dealfinder pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DealError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("session not found: {session_id}")]
    SessionNotFound { session_id: String },
}

/// Result alias used across the workspace.
pub type DealResult<T> = Result<T, DealError>;
