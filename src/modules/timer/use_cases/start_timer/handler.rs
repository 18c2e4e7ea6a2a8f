use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StartTimerError {
    #[error("invalid project id")]
    InvalidProjectId,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("an active timer already exists")]
    Conflict,

    #[error(transparent)]
    Store(TimerStoreError),
}

pub struct StartTimerHandler {
    timers: Arc<dyn TimerStore>,
    clock: Arc<dyn Clock>,
}

impl StartTimerHandler {
    pub fn new(timers: Arc<dyn TimerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { timers, clock }
    }

    /// Creates the user's single active timer. The conflict check is not a
    /// read-then-write: the store's conditional insert decides, so two
    /// concurrent starts cannot both win.
    pub async fn handle(
        &self,
        user_id: Uuid,
        project_id: &str,
        description: &str,
    ) -> Result<TimerRecord, StartTimerError> {
        let project_id =
            Uuid::parse_str(project_id).map_err(|_| StartTimerError::InvalidProjectId)?;
        if description.is_empty() {
            return Err(StartTimerError::EmptyDescription);
        }

        let timer = TimerRecord {
            id: Uuid::now_v7(),
            user_id,
            project_id,
            description: description.to_string(),
            start_time: self.clock.now(),
            status: TimerStatus::Running,
            paused_at: None,
            total_paused_duration: 0,
            last_resumed_at: None,
        };

        match self.timers.insert_active(timer.clone()).await {
            Ok(()) => Ok(timer),
            Err(TimerStoreError::DuplicateActive { .. }) => Err(StartTimerError::Conflict),
            Err(err) => Err(StartTimerError::Store(err)),
        }
    }
}
