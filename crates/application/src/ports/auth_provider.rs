use async_trait::async_trait;
use menuvault_domain::{AuthState, DomainError};

/// Resolves the caller's authentication state from a bearer token.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves `token` into an [`AuthState`].
    ///
    /// A missing or unknown token is not an error: it resolves to
    /// `AuthState::anonymous()`.
    ///
    /// # Errors
    ///
    /// * `DomainError::AuthResolution` - If the identity lookup itself failed
    async fn resolve(&self, token: Option<&str>) -> Result<AuthState, DomainError>;
}
