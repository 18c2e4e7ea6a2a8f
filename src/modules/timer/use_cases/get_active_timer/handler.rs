use crate::modules::projects::core::project::ProjectDisplay;
use crate::modules::timer::core::duration::elapsed_seconds;
use crate::modules::timer::core::timer::TimerRecord;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::project_store::{ProjectStore, ProjectStoreError};
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GetActiveTimerError {
    #[error(transparent)]
    Timers(#[from] TimerStoreError),

    #[error(transparent)]
    Projects(#[from] ProjectStoreError),
}

#[derive(Debug)]
pub struct ActiveTimer {
    pub timer: TimerRecord,
    pub elapsed_seconds: i64,
    pub project: Option<ProjectDisplay>,
}

pub struct GetActiveTimerHandler {
    timers: Arc<dyn TimerStore>,
    projects: Arc<dyn ProjectStore>,
    clock: Arc<dyn Clock>,
}

impl GetActiveTimerHandler {
    pub fn new(
        timers: Arc<dyn TimerStore>,
        projects: Arc<dyn ProjectStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            timers,
            projects,
            clock,
        }
    }

    /// Read-only: elapsed time is derived on demand, never ticked or
    /// written back.
    pub async fn handle(&self, user_id: Uuid) -> Result<Option<ActiveTimer>, GetActiveTimerError> {
        let Some(timer) = self.timers.find_active_by_user(user_id).await? else {
            return Ok(None);
        };

        let elapsed = elapsed_seconds(&timer, self.clock.now());
        let project = self
            .projects
            .display_info(&[timer.project_id])
            .await?
            .remove(&timer.project_id);

        Ok(Some(ActiveTimer {
            elapsed_seconds: elapsed,
            project,
            timer,
        }))
    }
}
