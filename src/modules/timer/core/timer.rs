use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timer is only persisted while it is active; stopping it deletes the
/// record and materializes a TimeLog instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub description: String,
    /// Set once at start, immutable afterwards.
    pub start_time: DateTime<Utc>,
    pub status: TimerStatus,
    /// Present iff status is Paused.
    pub paused_at: Option<DateTime<Utc>>,
    /// Whole seconds spent paused across all completed pause/resume cycles.
    pub total_paused_duration: i64,
    pub last_resumed_at: Option<DateTime<Utc>>,
}
