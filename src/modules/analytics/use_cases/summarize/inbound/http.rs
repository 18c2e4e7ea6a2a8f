use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::analytics::core::summary::Summary;
use crate::modules::analytics::use_cases::summarize::handler::{SummarizeError, SummarizeQuery};
use crate::shell::auth::AuthenticatedUser;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Comma-separated list.
    pub project_ids: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    pub date_range: DateRangeView,
}

/// Accepts RFC 3339 instants or bare `YYYY-MM-DD` dates (midnight UTC).
/// Anything else is treated as absent, matching the original parser.
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
    Query(params): Query<SummaryParams>,
) -> Response {
    let start = parse_date(params.start_date.as_deref());
    let end = parse_date(params.end_date.as_deref());
    let project_ids = params.project_ids.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect::<Vec<_>>()
    });

    let query = SummarizeQuery {
        start,
        end,
        project_ids,
    };

    match state.summarize.handle(user_id, query).await {
        Ok(summary) => Json(SummaryResponse {
            summary,
            date_range: DateRangeView { start, end },
        })
        .into_response(),
        Err(
            err @ (SummarizeError::InvalidRange
            | SummarizeError::RangeTooLarge
            | SummarizeError::InvalidProjectIds),
        ) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        Err(err) => {
            tracing::error!(error = %err, "analytics summary failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
