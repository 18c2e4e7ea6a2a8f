use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::timer::use_cases::start_timer::handler::StartTimerError;
use crate::modules::timer::use_cases::timer_view::TimerView;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerBody {
    pub project_id: String,
    pub description: String,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Result<Json<StartTimerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "projectId and description are required",
            );
        }
    };

    match state
        .start_timer
        .handle(user_id, &body.project_id, &body.description)
        .await
    {
        Ok(timer) => (StatusCode::CREATED, Json(TimerView::from_record(&timer))).into_response(),
        Err(
            err @ (StartTimerError::InvalidProjectId
            | StartTimerError::EmptyDescription
            | StartTimerError::Conflict),
        ) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        Err(StartTimerError::Store(err)) => {
            tracing::error!(error = %err, "start timer failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
