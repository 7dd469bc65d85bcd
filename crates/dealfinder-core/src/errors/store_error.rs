/// Cache-store adapter errors.
///
/// Transient variants are eligible for the adapter-boundary retry; all
/// other variants are permanent and surface immediately.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store connection failed: {message}")]
    Connection { message: String },

    #[error("store operation timed out: {message}")]
    Timeout { message: String },

    #[error("stored value could not be decoded: {message}")]
    Corrupt { message: String },

    #[error("store operation failed: {message}")]
    Operation { message: String },
}

impl StoreError {
    /// Whether a bounded retry is worthwhile.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}
