use async_trait::async_trait;
use menuvault_application::ports::{AuthProvider, UserDirectory};
use menuvault_domain::config::SessionEntry;
use menuvault_domain::{AuthState, DomainError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resolves bearer tokens against a fixed session table. Labels come from
/// the user directory on every call, so label changes apply immediately.
pub struct StaticSessionAuthProvider {
    sessions: HashMap<String, String>,
    directory: Arc<dyn UserDirectory>,
}

impl StaticSessionAuthProvider {
    pub fn new(sessions: &[SessionEntry], directory: Arc<dyn UserDirectory>) -> Self {
        let sessions = sessions
            .iter()
            .map(|s| (s.token.clone(), s.user_id.clone()))
            .collect();
        Self {
            sessions,
            directory,
        }
    }
}

#[async_trait]
impl AuthProvider for StaticSessionAuthProvider {
    #[instrument(skip_all)]
    async fn resolve(&self, token: Option<&str>) -> Result<AuthState, DomainError> {
        let Some(user_id) = token.and_then(|t| self.sessions.get(t)) else {
            return Ok(AuthState::anonymous());
        };

        let labels = match self.directory.labels(user_id).await {
            Ok(labels) => labels,
            Err(DomainError::UserNotFound(id)) => {
                return Err(DomainError::AuthResolution(format!(
                    "session references unknown user '{id}'"
                )))
            }
            Err(e) => return Err(DomainError::AuthResolution(e.to_string())),
        };

        debug!(user_id = %user_id, labels = labels.len(), "Session resolved");
        Ok(AuthState::authenticated(user_id.clone(), labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserDirectory;
    use menuvault_domain::config::UserEntry;
    use menuvault_domain::Role;

    fn provider(directory: Arc<InMemoryUserDirectory>) -> StaticSessionAuthProvider {
        let sessions = vec![
            SessionEntry {
                token: "t-admin".to_string(),
                user_id: "u1".to_string(),
            },
            SessionEntry {
                token: "t-orphan".to_string(),
                user_id: "gone".to_string(),
            },
        ];
        StaticSessionAuthProvider::new(&sessions, directory)
    }

    fn directory() -> Arc<InMemoryUserDirectory> {
        Arc::new(InMemoryUserDirectory::from_entries(&[UserEntry {
            id: "u1".to_string(),
            labels: vec!["Admin".to_string(), "beta".to_string()],
        }]))
    }

    #[tokio::test]
    async fn test_known_token_resolves_roles() {
        let auth = provider(directory()).resolve(Some("t-admin")).await.unwrap();

        assert!(auth.logged_in);
        assert_eq!(auth.user_id.as_deref(), Some("u1"));
        assert!(auth.has_role(Role::Admin));
        assert_eq!(auth.roles.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_unknown_token_is_anonymous() {
        let provider = provider(directory());

        assert!(!provider.resolve(None).await.unwrap().logged_in);
        assert!(!provider.resolve(Some("nope")).await.unwrap().logged_in);
    }

    #[tokio::test]
    async fn test_orphan_session_fails_resolution() {
        let err = provider(directory())
            .resolve(Some("t-orphan"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AuthResolution(_)));
    }

    #[tokio::test]
    async fn test_label_changes_apply_to_next_resolution() {
        let directory = directory();
        let provider = provider(directory.clone());

        directory
            .update_labels("u1", vec!["developer".to_string()])
            .await
            .unwrap();
        let auth = provider.resolve(Some("t-admin")).await.unwrap();

        assert!(!auth.is_admin());
        assert!(auth.has_role(Role::Developer));
    }
}
