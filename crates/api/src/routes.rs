use crate::handlers;
use crate::middleware::resolve_auth;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::menus::routes())
        .merge(handlers::guard::routes())
        .merge(handlers::labels::routes())
        .merge(handlers::cache::routes())
        .layer(middleware::from_fn_with_state(state.clone(), resolve_auth))
        .with_state(state)
}
