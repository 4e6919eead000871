use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::{
    dto::{GuardQuery, GuardResponse},
    middleware::bearer_token,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/guard", get(check_route))
}

#[instrument(skip(state, headers), name = "api_check_route")]
async fn check_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<GuardQuery>,
) -> Result<Json<GuardResponse>, (StatusCode, String)> {
    let path = query
        .path
        .filter(|p| p.starts_with('/'))
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "path must be an absolute route".to_string(),
            )
        })?;

    let decision = state
        .check_route_access
        .execute(&path, bearer_token(&headers))
        .await;

    Ok(Json(GuardResponse::from(decision)))
}
