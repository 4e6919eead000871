use async_trait::async_trait;
use menuvault_domain::{DomainError, MenuType};
use serde_json::Value;

/// Source of raw menu response bodies.
///
/// Implementations return the decoded `{code, data, message}` body as-is;
/// envelope validation happens in the fetch orchestrator, so a source must
/// not interpret `code` itself.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetches the raw envelope for `menu`.
    ///
    /// # Errors
    ///
    /// * `DomainError::Transport` - If the body could not be obtained or decoded
    async fn fetch(&self, menu: MenuType) -> Result<Value, DomainError>;
}
