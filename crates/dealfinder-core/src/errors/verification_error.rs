/// Verification subsystem errors. Always per-item, never batch-fatal:
/// the engine drops the affected deal and continues.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("missing required fields: {fields}")]
    MissingRequired { fields: String },

    #[error("reachability probe failed for {url}: {reason}")]
    ProbeFailed { url: String, reason: String },

    #[error("verification failed for result #{result_number}: {reason}")]
    ItemFailed { result_number: u32, reason: String },
}
