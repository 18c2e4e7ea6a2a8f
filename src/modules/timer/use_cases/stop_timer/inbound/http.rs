use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::time_logs::core::time_log::TimeLogView;
use crate::modules::timer::use_cases::stop_timer::handler::StopTimerError;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerResponse {
    pub success: bool,
    pub message: String,
    pub duration: i64,
    pub time_log: Option<TimeLogView>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Response {
    match state.stop_timer.handle(id, user_id).await {
        Ok(result) => Json(StopTimerResponse {
            success: true,
            message: "Timer stopped".into(),
            duration: result.duration,
            time_log: result.log.as_ref().map(TimeLogView::from_record),
        })
        .into_response(),
        Err(StopTimerError::NotFound) => error_response(StatusCode::NOT_FOUND, "timer not found"),
        Err(StopTimerError::Store(err)) => {
            tracing::error!(error = %err, "stop timer failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
