/// Ranking subsystem errors. A ranking failure never aborts a turn; the
/// orchestrator degrades to the verified order.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("semantic adjustment unavailable: {reason}")]
    SemanticUnavailable { reason: String },

    #[error("ranking pass failed: {reason}")]
    RankingFailed { reason: String },
}
