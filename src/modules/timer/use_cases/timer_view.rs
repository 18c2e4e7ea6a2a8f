// Wire representations shared by the timer endpoints.

use crate::modules::projects::core::project::ProjectDisplay;
use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerView {
    pub id: Uuid,
    pub project_id: Uuid,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub status: TimerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<DateTime<Utc>>,
    pub total_paused_duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_resumed_at: Option<DateTime<Utc>>,
}

impl TimerView {
    pub fn from_record(record: &TimerRecord) -> Self {
        Self {
            id: record.id,
            project_id: record.project_id,
            description: record.description.clone(),
            start_time: record.start_time,
            status: record.status,
            paused_at: record.paused_at,
            total_paused_duration: record.total_paused_duration,
            last_resumed_at: record.last_resumed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRefView {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ProjectRefView {
    pub fn new(id: Uuid, display: ProjectDisplay) -> Self {
        Self {
            id,
            name: display.name,
            color: display.color,
        }
    }
}

/// Active-timer payload: the timer plus its on-demand elapsed seconds and
/// the owning project's display attributes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimerView {
    #[serde(flatten)]
    pub timer: TimerView,
    pub elapsed_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRefView>,
}
