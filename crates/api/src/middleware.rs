use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use menuvault_domain::AuthState;
use tracing::warn;

use crate::state::AppState;

/// Token from an `Authorization: Bearer <token>` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolves the caller's [`AuthState`] and stores it as a request extension.
/// A resolution failure downgrades the caller to anonymous.
pub async fn resolve_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers()).map(str::to_owned);

    let auth = match state.auth.resolve(token.as_deref()).await {
        Ok(auth) => auth,
        Err(e) => {
            warn!(error = %e, "Auth resolution failed, continuing as anonymous");
            AuthState::anonymous()
        }
    };

    request.extensions_mut().insert(auth);
    next.run(request).await
}
