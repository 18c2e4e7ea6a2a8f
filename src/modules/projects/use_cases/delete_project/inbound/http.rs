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

/// Deleting a project also removes its time logs; orphaned logs would
/// surface as "Unknown" rows in every summary afterwards.
pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Response {
    match state.projects.find_by_id_and_user(id, user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "project not found"),
        Err(err) => {
            tracing::error!(error = %err, "delete project failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    }

    let removed_logs = match state.time_logs.delete_by_project(id, user_id).await {
        Ok(count) => count,
        Err(err) => {
            tracing::error!(error = %err, "cascade delete of time logs failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    match state.projects.delete(id, user_id).await {
        Ok(_) => Json(json!({
            "message": "Deleted",
            "removedTimeLogs": removed_logs,
        }))
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "delete project failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
