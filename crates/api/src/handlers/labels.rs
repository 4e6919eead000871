use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Extension, Router,
};
use menuvault_domain::{AuthState, DomainError, LabelMutationRequest};
use tracing::{error, instrument, warn};

use crate::{dto::LabelsResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users/labels", post(update_user_labels))
}

#[instrument(skip(state, auth, req), name = "api_update_user_labels")]
async fn update_user_labels(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthState>,
    Json(req): Json<LabelMutationRequest>,
) -> (StatusCode, Json<LabelsResponse>) {
    let (status, message) = match state.update_labels.execute(&auth, req).await {
        Ok(outcome) => return (StatusCode::OK, Json(LabelsResponse::from(outcome))),
        Err(
            e @ (DomainError::MissingParameter(_)
            | DomainError::InvalidParameter(_)
            | DomainError::InvalidLabel(_)),
        ) => (StatusCode::BAD_REQUEST, e.to_string()),
        Err(DomainError::Unauthenticated) => (
            StatusCode::UNAUTHORIZED,
            "Authentication required".to_string(),
        ),
        Err(DomainError::PermissionDenied(msg)) => {
            warn!(caller = ?auth.user_id, "Label mutation denied");
            (StatusCode::FORBIDDEN, msg)
        }
        Err(e @ DomainError::UserNotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => {
            error!(error = %e, "Failed to update user labels");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    (status, Json(LabelsResponse::failure(message)))
}
