use crate::modules::analytics::core::summary::{Summary, summarize};
use crate::shared::infrastructure::project_store::{ProjectStore, ProjectStoreError};
use crate::shared::infrastructure::time_log_store::{
    TimeLogFilter, TimeLogStore, TimeLogStoreError,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Longest span, in calendar days, a summary may cover.
pub const MAX_RANGE_DAYS: i64 = 365;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("startDate must be before or equal to endDate")]
    InvalidRange,

    #[error("date range cannot exceed {MAX_RANGE_DAYS} days")]
    RangeTooLarge,

    #[error("no valid project ids provided")]
    InvalidProjectIds,

    #[error(transparent)]
    TimeLogs(#[from] TimeLogStoreError),

    #[error(transparent)]
    Projects(#[from] ProjectStoreError),
}

#[derive(Debug, Default, Clone)]
pub struct SummarizeQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Raw project id strings; invalid ones are filtered out, matching the
    /// original filter behavior, but an all-invalid list is rejected.
    pub project_ids: Option<Vec<String>>,
}

pub struct SummarizeHandler {
    time_logs: Arc<dyn TimeLogStore>,
    projects: Arc<dyn ProjectStore>,
}

impl SummarizeHandler {
    pub fn new(time_logs: Arc<dyn TimeLogStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self {
            time_logs,
            projects,
        }
    }

    /// Pure read; safe for concurrent invocation. No aggregation is
    /// attempted when validation fails.
    pub async fn handle(
        &self,
        user_id: Uuid,
        query: SummarizeQuery,
    ) -> Result<Summary, SummarizeError> {
        if let (Some(start), Some(end)) = (query.start, query.end) {
            if start > end {
                return Err(SummarizeError::InvalidRange);
            }
            let diff_days = ((end - start).num_seconds() + 86_399) / 86_400;
            if diff_days > MAX_RANGE_DAYS {
                return Err(SummarizeError::RangeTooLarge);
            }
        }

        let project_ids = match &query.project_ids {
            Some(raw) => {
                let valid: Vec<Uuid> = raw
                    .iter()
                    .filter_map(|id| Uuid::parse_str(id).ok())
                    .collect();
                if valid.is_empty() {
                    return Err(SummarizeError::InvalidProjectIds);
                }
                Some(valid)
            }
            None => None,
        };

        let filter = TimeLogFilter {
            user_id,
            start: query.start,
            end: query.end,
            project_ids,
        };
        let logs = self.time_logs.find(&filter).await?;

        let distinct: Vec<Uuid> = logs
            .iter()
            .map(|log| log.project_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let displays = self.projects.display_info(&distinct).await?;

        Ok(summarize(&logs, &displays))
    }
}
