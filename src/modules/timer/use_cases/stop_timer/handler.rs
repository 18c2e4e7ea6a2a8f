use crate::modules::time_logs::core::time_log::TimeLogRecord;
use crate::modules::timer::core::duration::final_duration;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::time_log_store::TimeLogStore;
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StopTimerError {
    #[error("timer not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] TimerStoreError),
}

/// Outcome of a stop. `log` is None when the history write failed; the
/// timer is gone either way.
#[derive(Debug)]
pub struct StopResult {
    pub duration: i64,
    pub log: Option<TimeLogRecord>,
}

pub struct StopTimerHandler {
    timers: Arc<dyn TimerStore>,
    time_logs: Arc<dyn TimeLogStore>,
    clock: Arc<dyn Clock>,
}

impl StopTimerHandler {
    pub fn new(
        timers: Arc<dyn TimerStore>,
        time_logs: Arc<dyn TimeLogStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            timers,
            time_logs,
            clock,
        }
    }

    /// Terminates the timer and materializes its TimeLog.
    ///
    /// The delete doubles as the race guard: of two concurrent stops, the
    /// loser observes a missing record and fails with NotFound. A failed
    /// TimeLog insert is deliberately non-fatal; losing the historical
    /// record is preferred over leaving a timer the user can never stop.
    pub async fn handle(&self, timer_id: Uuid, user_id: Uuid) -> Result<StopResult, StopTimerError> {
        let timer = self
            .timers
            .find_by_id_and_user(timer_id, user_id)
            .await?
            .ok_or(StopTimerError::NotFound)?;

        let end_time = self.clock.now();
        let duration = final_duration(&timer, end_time);

        if !self.timers.delete(timer.id).await? {
            return Err(StopTimerError::NotFound);
        }

        let log = TimeLogRecord {
            id: Uuid::now_v7(),
            user_id: timer.user_id,
            project_id: timer.project_id,
            description: timer.description.clone(),
            start_time: timer.start_time,
            end_time,
            duration,
            timer_id: Some(timer.id),
        };

        let log = match self.time_logs.insert(log.clone()).await {
            Ok(()) => Some(log),
            Err(err) => {
                tracing::warn!(error = %err, timer_id = %timer.id, "failed to create time log; stop continues without history");
                None
            }
        };

        Ok(StopResult { duration, log })
    }
}
