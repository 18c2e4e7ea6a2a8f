use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::timer::use_cases::timer_view::{ActiveTimerView, ProjectRefView, TimerView};
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Response {
    match state.get_active_timer.handle(user_id).await {
        Ok(active) => {
            let view = active.map(|active| ActiveTimerView {
                elapsed_seconds: active.elapsed_seconds,
                project: active
                    .project
                    .map(|display| ProjectRefView::new(active.timer.project_id, display)),
                timer: TimerView::from_record(&active.timer),
            });
            Json(view).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "get active timer failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
