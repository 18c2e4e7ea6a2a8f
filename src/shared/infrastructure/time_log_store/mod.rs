use crate::modules::time_logs::core::time_log::TimeLogRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TimeLogStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Filter applied to `start_time` and `project_id`; `user_id` always
/// scopes the result set.
#[derive(Debug, Clone)]
pub struct TimeLogFilter {
    pub user_id: Uuid,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub project_ids: Option<Vec<Uuid>>,
}

impl TimeLogFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            start: None,
            end: None,
            project_ids: None,
        }
    }

    pub fn matches(&self, log: &TimeLogRecord) -> bool {
        if log.user_id != self.user_id {
            return false;
        }
        if let Some(start) = self.start {
            if log.start_time < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if log.start_time > end {
                return false;
            }
        }
        if let Some(ids) = &self.project_ids {
            if !ids.contains(&log.project_id) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait TimeLogStore: Send + Sync {
    async fn insert(&self, log: TimeLogRecord) -> Result<(), TimeLogStoreError>;

    /// Matching records in unspecified order; callers sort.
    async fn find(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLogRecord>, TimeLogStoreError>;

    async fn delete_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TimeLogStoreError>;

    /// Cascade hook for project deletion. Returns the number removed.
    async fn delete_by_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, TimeLogStoreError>;
}

pub mod in_memory;
