use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::time_logs::core::time_log::TimeLogView;
use crate::shared::infrastructure::time_log_store::TimeLogFilter;
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub project_id: Option<String>,
    /// Comma-separated list; combined with `projectId` when both appear.
    pub project_ids: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<TimeLogView>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub sort_by: String,
    pub sort_order: String,
}

fn parse_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Query(params): Query<ListParams>,
) -> Response {
    let mut project_ids: Vec<Uuid> = Vec::new();
    if let Some(raw) = params.project_id.as_deref() {
        if let Ok(id) = Uuid::parse_str(raw) {
            project_ids.push(id);
        }
    }
    if let Some(raw) = params.project_ids.as_deref() {
        project_ids.extend(
            raw.split(',')
                .map(str::trim)
                .filter_map(|id| Uuid::parse_str(id).ok()),
        );
    }

    let filter = TimeLogFilter {
        user_id,
        start: parse_date(params.start_date.as_deref()),
        end: parse_date(params.end_date.as_deref()),
        project_ids: if project_ids.is_empty() {
            None
        } else {
            Some(project_ids)
        },
    };

    let mut logs = match state.time_logs.find(&filter).await {
        Ok(logs) => logs,
        Err(err) => {
            tracing::error!(error = %err, "list time logs failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    let sort_by = match params.sort_by.as_deref() {
        Some("duration") => "duration",
        _ => "date",
    };
    let sort_order = match params.sort_order.as_deref() {
        Some("asc") => "asc",
        _ => "desc",
    };
    logs.sort_by(|a, b| {
        let ordering = match sort_by {
            "duration" => a.duration.cmp(&b.duration),
            _ => a.start_time.cmp(&b.start_time),
        };
        if sort_order == "desc" {
            ordering.reverse()
        } else {
            ordering
        }
    });

    let total = logs.len();
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let items = logs
        .iter()
        .skip(page.saturating_sub(1).saturating_mul(limit))
        .take(limit)
        .map(TimeLogView::from_record)
        .collect();

    Json(ListResponse {
        items,
        total,
        page,
        limit,
        sort_by: sort_by.into(),
        sort_order: sort_order.into(),
    })
    .into_response()
}
