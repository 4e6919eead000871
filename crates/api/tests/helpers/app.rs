use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use menuvault_api::{create_api_routes, AppState};
use menuvault_application::ports::{AuthProvider, MenuSource, UserDirectory};
use menuvault_application::services::{FetchOrchestrator, SystemClock, TtlCache};
use menuvault_application::use_cases::{
    CheckRouteAccessUseCase, GetMenuUseCase, ManageMenuCacheUseCase, ResolveActiveMenuUseCase,
    UpdateUserLabelsUseCase,
};
use menuvault_domain::config::{SessionEntry, UserEntry};
use menuvault_domain::{DomainError, MenuType, RouteGuard};
use menuvault_infrastructure::auth::StaticSessionAuthProvider;
use menuvault_infrastructure::repositories::InMemoryUserDirectory;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";

/// Menu source returning a fixed body (or a transport failure) and counting calls.
pub struct FixedMenuSource {
    body: Option<Value>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl FixedMenuSource {
    pub fn body(body: Value) -> Self {
        Self {
            body: Some(body),
            offline: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            body: None,
            offline: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for FixedMenuSource {
    async fn fetch(&self, _menu: MenuType) -> Result<Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        self.body
            .clone()
            .ok_or_else(|| DomainError::Transport("connection refused".to_string()))
    }
}

pub fn build_app(source: Arc<dyn MenuSource>) -> Router {
    let orchestrator = Arc::new(FetchOrchestrator::new(
        Arc::new(TtlCache::new()),
        Arc::new(SystemClock),
    ));

    let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::from_entries(&[
        user("u1", &["admin"]),
        user("u2", &["user"]),
    ]));
    let auth: Arc<dyn AuthProvider> = Arc::new(StaticSessionAuthProvider::new(
        &[session(ADMIN_TOKEN, "u1"), session(USER_TOKEN, "u2")],
        directory.clone(),
    ));

    let get_menu = Arc::new(GetMenuUseCase::new(source, orchestrator.clone()));
    let state = AppState {
        resolve_active_menu: Arc::new(ResolveActiveMenuUseCase::new(get_menu.clone())),
        get_menu,
        check_route_access: Arc::new(CheckRouteAccessUseCase::new(
            auth.clone(),
            Arc::new(RouteGuard::default()),
        )),
        update_labels: Arc::new(UpdateUserLabelsUseCase::new(directory)),
        manage_cache: Arc::new(ManageMenuCacheUseCase::new(orchestrator)),
        auth,
    };

    create_api_routes(state)
}

fn user(id: &str, labels: &[&str]) -> UserEntry {
    UserEntry {
        id: id.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

fn session(token: &str, user_id: &str) -> SessionEntry {
    SessionEntry {
        token: token.to_string(),
        user_id: user_id.to_string(),
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status and body. Non-JSON bodies come
/// back as a JSON string.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, request(Method::GET, uri, token, None)).await
}
