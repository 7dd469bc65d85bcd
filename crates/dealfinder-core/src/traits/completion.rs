use async_trait::async_trait;

use crate::errors::ProviderError;

/// LLM completion capability. Callers parse the free text with a strict
/// regex or JSON schema; a malformed response means "no output produced",
/// never a hard error.
#[async_trait]
pub trait ICompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
