use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::projects::core::project::{ProjectRecord, ProjectView};
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "name is required");
    };
    if body.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "name is required");
    }

    let project = ProjectRecord {
        id: Uuid::now_v7(),
        user_id,
        name: body.name.trim().to_string(),
        description: body.description,
        color: body.color,
        created_at: state.clock.now(),
    };

    match state.projects.insert(project.clone()).await {
        Ok(()) => (StatusCode::CREATED, Json(ProjectView::from_record(&project))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "create project failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
