use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Response {
    match state.time_logs.delete_by_id_and_user(id, user_id).await {
        Ok(true) => Json(json!({ "message": "Deleted" })).into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "time log not found"),
        Err(err) => {
            tracing::error!(error = %err, "delete time log failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
