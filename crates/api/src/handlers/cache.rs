use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use menuvault_application::use_cases::CacheStats;
use menuvault_domain::{AuthState, MENU_CACHE_PREFIX};
use tracing::{debug, instrument};

use crate::{
    dto::{InvalidateCacheQuery, InvalidateCacheResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cache/stats", get(get_cache_stats))
        .route("/api/cache", delete(invalidate_cache))
}

#[instrument(skip(state), name = "api_get_cache_stats")]
async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    let stats = state.manage_cache.stats();
    debug!(entries = stats.entries, "Cache statistics collected");
    Json(stats)
}

/// Removes cached entries by key prefix; defaults to every menu entry.
#[instrument(skip(state, auth), name = "api_invalidate_cache")]
async fn invalidate_cache(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthState>,
    Query(query): Query<InvalidateCacheQuery>,
) -> Result<Json<InvalidateCacheResponse>, (StatusCode, String)> {
    if !auth.logged_in {
        return Err((
            StatusCode::UNAUTHORIZED,
            "Authentication required".to_string(),
        ));
    }
    if !auth.is_admin() {
        return Err((
            StatusCode::FORBIDDEN,
            "Only administrators can clear the cache".to_string(),
        ));
    }

    let prefix = query
        .prefix
        .unwrap_or_else(|| MENU_CACHE_PREFIX.to_string());
    let removed = state.manage_cache.invalidate(&prefix);

    Ok(Json(InvalidateCacheResponse { removed }))
}
