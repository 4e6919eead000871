use async_trait::async_trait;
use menuvault_application::ports::UserDirectory;
use menuvault_domain::config::UserEntry;
use menuvault_domain::DomainError;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Process-local user directory seeded from `[[users]]`. Changes are lost on
/// restart.
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_entries(entries: &[UserEntry]) -> Self {
        let users = entries
            .iter()
            .map(|entry| (entry.id.clone(), entry.labels.clone()))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn labels(&self, user_id: &str) -> Result<Vec<String>, DomainError> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))
    }

    #[instrument(skip(self))]
    async fn update_labels(
        &self,
        user_id: &str,
        labels: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(user_id)
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        *stored = labels;
        debug!(user_id, labels = stored.len(), "Labels replaced");
        Ok(stored.clone())
    }
}
