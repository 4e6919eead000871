use async_trait::async_trait;
use menuvault_application::ports::{AuthProvider, MenuSource, UserDirectory};
use menuvault_domain::{AuthState, DomainError, MenuItem, MenuType, ResponseEnvelope};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock MenuSource
// ============================================================================

#[derive(Clone)]
pub struct MockMenuSource {
    bodies: Arc<RwLock<HashMap<MenuType, Value>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockMenuSource {
    pub fn new() -> Self {
        Self {
            bodies: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn with_menu(menu: MenuType, items: Vec<MenuItem>) -> Self {
        let source = Self::new();
        source.set_menu(menu, items).await;
        source
    }

    pub async fn set_menu(&self, menu: MenuType, items: Vec<MenuItem>) {
        let body = ResponseEnvelope::success(items, "ok").to_body().unwrap();
        self.bodies.write().await.insert(menu, body);
    }

    pub async fn set_body(&self, menu: MenuType, body: Value) {
        self.bodies.write().await.insert(menu, body);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockMenuSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuSource for MockMenuSource {
    async fn fetch(&self, menu: MenuType) -> Result<Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::Transport("mock source offline".to_string()));
        }
        self.bodies
            .read()
            .await
            .get(&menu)
            .cloned()
            .ok_or_else(|| DomainError::Transport(format!("no body for {menu}")))
    }
}

// ============================================================================
// Mock AuthProvider
// ============================================================================

pub struct MockAuthProvider {
    sessions: HashMap<String, AuthState>,
    should_fail: bool,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sessions: HashMap::new(),
            should_fail: true,
        }
    }

    pub fn with_session(mut self, token: &str, state: AuthState) -> Self {
        self.sessions.insert(token.to_string(), state);
        self
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn resolve(&self, token: Option<&str>) -> Result<AuthState, DomainError> {
        if self.should_fail {
            return Err(DomainError::AuthResolution(
                "identity provider unreachable".to_string(),
            ));
        }
        Ok(token
            .and_then(|t| self.sessions.get(t).cloned())
            .unwrap_or_else(AuthState::anonymous))
    }
}

// ============================================================================
// Mock UserDirectory
// ============================================================================

#[derive(Clone)]
pub struct MockUserDirectory {
    users: Arc<RwLock<HashMap<String, Vec<String>>>>,
    updates: Arc<AtomicUsize>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            updates: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn with_user(self, id: &str, labels: &[&str]) -> Self {
        self.users.write().await.insert(
            id.to_string(),
            labels.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn labels(&self, user_id: &str) -> Result<Vec<String>, DomainError> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))
    }

    async fn update_labels(
        &self,
        user_id: &str,
        labels: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let mut users = self.users.write().await;
        let entry = users
            .get_mut(user_id)
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        *entry = labels.clone();
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(labels)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("1", "Overview", "/admin"),
        MenuItem::group(
            "users",
            "Users",
            vec![
                MenuItem::link("2", "List", "/admin/users/list"),
                MenuItem::link("3", "Roles", "/admin/users/roles").with_roles(&["admin"]),
            ],
        ),
    ]
}
