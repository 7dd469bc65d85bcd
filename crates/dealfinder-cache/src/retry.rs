//! Bounded retry at the store-adapter boundary.
//!
//! Retries exist only here: transient connection/timeout errors get a
//! bounded number of attempts, everything else surfaces immediately.
//! Business-logic stages degrade instead of retrying.

use std::future::Future;
use tracing::warn;

use dealfinder_core::errors::StoreError;

/// Run `op` up to `attempts` times, retrying only transient errors.
pub async fn with_retry<T, F, Fut>(attempts: u32, op: F) -> Result<T, StoreError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let attempts = attempts.max(1);
    let mut last_err = None;

    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < attempts => {
                warn!(attempt, attempts, error = %err, "transient store error, retrying");
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    // Unreachable in practice: the loop always returns. Kept for totality.
    Err(last_err.unwrap_or(StoreError::Operation {
        message: "retry loop exhausted".to_string(),
    }))
}
