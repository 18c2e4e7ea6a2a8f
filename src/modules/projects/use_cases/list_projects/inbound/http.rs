use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::projects::core::project::ProjectView;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Response {
    match state.projects.list_by_user(user_id).await {
        Ok(projects) => {
            let views: Vec<ProjectView> = projects.iter().map(ProjectView::from_record).collect();
            Json(views).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "list projects failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
