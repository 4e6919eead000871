use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use menuvault_domain::menu::visible_to;
use menuvault_domain::{AuthState, MenuItem, MenuSelection, MenuType, ResponseEnvelope};
use tracing::{debug, instrument, warn};

use crate::{
    dto::{ActiveMenuQuery, MenuQuery},
    state::AppState,
};

type MenuReply = (StatusCode, Json<ResponseEnvelope<Vec<MenuItem>>>);

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/menus/{menu_type}", get(get_menu))
        .route("/api/menus/{menu_type}/active", get(get_active_menu))
}

#[instrument(skip(state, auth), name = "api_get_menu")]
async fn get_menu(
    State(state): State<AppState>,
    Path(menu_type): Path<String>,
    Query(query): Query<MenuQuery>,
    Extension(auth): Extension<AuthState>,
) -> MenuReply {
    let menu = match menu_type.parse::<MenuType>() {
        Ok(menu) => menu,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ResponseEnvelope::failure(404, e.to_string())),
            )
        }
    };

    let fetched = state.get_menu.execute(menu, query.refresh).await;

    match fetched.error {
        Some(error) if !fetched.has_data => {
            warn!(menu = %menu, error = %error, "Menu unavailable");
            (
                StatusCode::BAD_GATEWAY,
                Json(ResponseEnvelope::failure(error.code(), error.message())),
            )
        }
        _ => {
            let items = visible_to(&fetched.items, &auth);
            debug!(
                menu = %menu,
                origin = fetched.origin.as_str(),
                visible = items.len(),
                "Menu served"
            );
            (StatusCode::OK, Json(ResponseEnvelope::success(items, "ok")))
        }
    }
}

#[instrument(skip(state, auth), name = "api_get_active_menu")]
async fn get_active_menu(
    State(state): State<AppState>,
    Path(menu_type): Path<String>,
    Query(query): Query<ActiveMenuQuery>,
    Extension(auth): Extension<AuthState>,
) -> Result<Json<MenuSelection>, (StatusCode, String)> {
    let menu = menu_type
        .parse::<MenuType>()
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    let path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Missing path parameter".to_string()))?;

    match state.resolve_active_menu.execute(menu, &path, &auth).await {
        Ok(Some(selection)) => Ok(Json(selection)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            format!("No {menu} menu item routes to {path}"),
        )),
        Err(e) => {
            warn!(menu = %menu, error = %e, "Menu unavailable");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
