use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::timer::use_cases::pause_timer::handler::PauseTimerError;
use crate::modules::timer::use_cases::timer_view::TimerView;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Response {
    match state.pause_timer.handle(id, user_id).await {
        Ok(timer) => Json(TimerView::from_record(&timer)).into_response(),
        Err(PauseTimerError::NotFound) => error_response(StatusCode::NOT_FOUND, "timer not found"),
        Err(err @ PauseTimerError::NotRunning) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(PauseTimerError::Store(err)) => {
            tracing::error!(error = %err, "pause timer failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
