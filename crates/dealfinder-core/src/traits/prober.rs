use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of one reachability probe. A timeout is a definitive
/// "unreachable" verdict for the pass, not a retryable condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeVerdict {
    pub valid: bool,
    pub reason: String,
}

impl ProbeVerdict {
    pub fn valid(reason: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Bounded-timeout URL reachability check.
#[async_trait]
pub trait IUrlProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeVerdict;
}
