use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::timer::use_cases::resume_timer::handler::ResumeTimerError;
use crate::modules::timer::use_cases::timer_view::TimerView;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(_user_id): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Response {
    match state.resume_timer.handle(id).await {
        Ok(timer) => Json(TimerView::from_record(&timer)).into_response(),
        Err(ResumeTimerError::NotFound) => error_response(StatusCode::NOT_FOUND, "timer not found"),
        Err(err @ (ResumeTimerError::NotPaused | ResumeTimerError::MissingPausedAt)) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(ResumeTimerError::Store(err)) => {
            tracing::error!(error = %err, "resume timer failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
