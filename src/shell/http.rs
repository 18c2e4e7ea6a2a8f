// HTTP surface.
//
// Every route lives under /api and, apart from /api/health, requires a
// bearer token. Error bodies are always `{ "message": ... }`.

use axum::{
    Json, Router,
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::analytics::use_cases::summarize;
use crate::modules::projects::use_cases::{
    create_project, delete_project, list_projects, update_project,
};
use crate::modules::time_logs::use_cases::{delete_time_log, list_time_logs};
use crate::modules::timer::use_cases::{
    get_active_timer, pause_timer, resume_timer, start_timer, stop_timer,
};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
        .into_response()
}

async fn health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

async fn fallback(OriginalUri(uri): OriginalUri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Not found",
            "path": uri.path(),
        })),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/timer/active", get(get_active_timer::inbound::http::handle))
        .route("/api/timer/start", post(start_timer::inbound::http::handle))
        .route("/api/timer/{id}/pause", patch(pause_timer::inbound::http::handle))
        .route("/api/timer/{id}/resume", patch(resume_timer::inbound::http::handle))
        .route("/api/timer/{id}/stop", patch(stop_timer::inbound::http::handle))
        .route("/api/analytics/summary", get(summarize::inbound::http::handle))
        .route("/api/timelogs", get(list_time_logs::inbound::http::handle))
        .route("/api/timelogs/{id}", delete(delete_time_log::inbound::http::handle))
        .route(
            "/api/projects",
            get(list_projects::inbound::http::handle).post(create_project::inbound::http::handle),
        )
        .route(
            "/api/projects/{id}",
            patch(update_project::inbound::http::handle)
                .delete(delete_project::inbound::http::handle),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
