use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Immutable historical record of one completed timer run. Created exactly
/// once, at stop; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Net worked seconds, paused intervals excluded.
    pub duration: i64,
    /// Back-reference to the originating timer, for traceability only.
    pub timer_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogView {
    pub id: Uuid,
    pub project_id: Uuid,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
}

impl TimeLogView {
    pub fn from_record(record: &TimeLogRecord) -> Self {
        Self {
            id: record.id,
            project_id: record.project_id,
            description: record.description.clone(),
            start_time: record.start_time,
            end_time: record.end_time,
            duration: record.duration,
        }
    }
}
