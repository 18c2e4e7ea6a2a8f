use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ResumeTimerError {
    #[error("timer not found")]
    NotFound,

    #[error("timer is not paused")]
    NotPaused,

    #[error("timer has no pause timestamp")]
    MissingPausedAt,

    #[error(transparent)]
    Store(#[from] TimerStoreError),
}

pub struct ResumeTimerHandler {
    timers: Arc<dyn TimerStore>,
    clock: Arc<dyn Clock>,
}

impl ResumeTimerHandler {
    pub fn new(timers: Arc<dyn TimerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { timers, clock }
    }

    /// Folds the closed pause interval into `total_paused_duration` and
    /// puts the timer back into Running. Each interval is floored to whole
    /// seconds independently; the cumulative value may under-count slightly
    /// across many cycles, which is the documented contract.
    pub async fn handle(&self, timer_id: Uuid) -> Result<TimerRecord, ResumeTimerError> {
        let timer = self
            .timers
            .find_by_id(timer_id)
            .await?
            .ok_or(ResumeTimerError::NotFound)?;

        if timer.status != TimerStatus::Paused {
            return Err(ResumeTimerError::NotPaused);
        }
        let Some(paused_at) = timer.paused_at else {
            return Err(ResumeTimerError::MissingPausedAt);
        };

        let now = self.clock.now();
        let pause_duration = (now - paused_at).num_seconds();

        let mut updated = timer;
        updated.total_paused_duration += pause_duration;
        updated.status = TimerStatus::Running;
        updated.paused_at = None;
        updated.last_resumed_at = Some(now);

        if self
            .timers
            .update_guarded(updated.clone(), TimerStatus::Paused)
            .await?
        {
            Ok(updated)
        } else {
            Err(ResumeTimerError::NotPaused)
        }
    }
}
