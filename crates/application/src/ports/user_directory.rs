use async_trait::async_trait;
use menuvault_domain::DomainError;

/// Repository interface for user role labels.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Retrieves the labels of a user.
    ///
    /// # Errors
    ///
    /// * `DomainError::UserNotFound` - If no user with this ID exists
    async fn labels(&self, user_id: &str) -> Result<Vec<String>, DomainError>;

    /// Replaces the labels of a user and returns the stored labels.
    ///
    /// # Errors
    ///
    /// * `DomainError::UserNotFound` - If no user with this ID exists
    async fn update_labels(
        &self,
        user_id: &str,
        labels: Vec<String>,
    ) -> Result<Vec<String>, DomainError>;
}
