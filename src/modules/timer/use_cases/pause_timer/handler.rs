use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PauseTimerError {
    #[error("timer not found")]
    NotFound,

    #[error("timer is not running")]
    NotRunning,

    #[error(transparent)]
    Store(#[from] TimerStoreError),
}

pub struct PauseTimerHandler {
    timers: Arc<dyn TimerStore>,
    clock: Arc<dyn Clock>,
}

impl PauseTimerHandler {
    pub fn new(timers: Arc<dyn TimerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { timers, clock }
    }

    /// Freezes a running timer. `total_paused_duration` is untouched here;
    /// the pause interval is folded in at resume.
    pub async fn handle(
        &self,
        timer_id: Uuid,
        user_id: Uuid,
    ) -> Result<TimerRecord, PauseTimerError> {
        let timer = self
            .timers
            .find_by_id_and_user(timer_id, user_id)
            .await?
            .ok_or(PauseTimerError::NotFound)?;

        if timer.status != TimerStatus::Running {
            return Err(PauseTimerError::NotRunning);
        }

        let mut updated = timer;
        updated.status = TimerStatus::Paused;
        updated.paused_at = Some(self.clock.now());

        // The guard loses if a concurrent stop or pause got there first.
        if self
            .timers
            .update_guarded(updated.clone(), TimerStatus::Running)
            .await?
        {
            Ok(updated)
        } else {
            Err(PauseTimerError::NotRunning)
        }
    }
}

#[cfg(test)]
mod pause_timer_handler_tests {
    use super::*;
    use crate::shared::core::clock::FixedClock;
    use crate::shared::infrastructure::timer_store::in_memory::InMemoryTimerStore;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap()
    }

    fn make_running(user_id: Uuid, start: DateTime<Utc>) -> TimerRecord {
        TimerRecord {
            id: Uuid::now_v7(),
            user_id,
            project_id: Uuid::now_v7(),
            description: "focus".into(),
            start_time: start,
            status: TimerStatus::Running,
            paused_at: None,
            total_paused_duration: 0,
            last_resumed_at: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_pause_a_running_timer_at_the_clock_instant(t0: DateTime<Utc>) {
        let timers = Arc::new(InMemoryTimerStore::new());
        let clock = Arc::new(FixedClock::at(t0));
        let user_id = Uuid::now_v7();
        let timer = make_running(user_id, t0);
        timers.insert_active(timer.clone()).await.unwrap();
        clock.advance(Duration::seconds(10));

        let handler = PauseTimerHandler::new(timers, clock);
        let paused = handler.handle(timer.id, user_id).await.expect("pause failed");

        assert_eq!(paused.status, TimerStatus::Paused);
        assert_eq!(paused.paused_at, Some(t0 + Duration::seconds(10)));
        assert_eq!(paused.total_paused_duration, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_or_foreign_timer(t0: DateTime<Utc>) {
        let timers = Arc::new(InMemoryTimerStore::new());
        let clock = Arc::new(FixedClock::at(t0));
        let user_id = Uuid::now_v7();
        let timer = make_running(user_id, t0);
        timers.insert_active(timer.clone()).await.unwrap();

        let handler = PauseTimerHandler::new(timers, clock);
        let result = handler.handle(Uuid::now_v7(), user_id).await;
        assert!(matches!(result, Err(PauseTimerError::NotFound)));

        let result = handler.handle(timer.id, Uuid::now_v7()).await;
        assert!(matches!(result, Err(PauseTimerError::NotFound)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_pause_a_paused_timer(t0: DateTime<Utc>) {
        let timers = Arc::new(InMemoryTimerStore::new());
        let clock = Arc::new(FixedClock::at(t0));
        let user_id = Uuid::now_v7();
        let mut timer = make_running(user_id, t0);
        timer.status = TimerStatus::Paused;
        timer.paused_at = Some(t0);
        timers.insert_active(timer.clone()).await.unwrap();

        let handler = PauseTimerHandler::new(timers, clock);
        let result = handler.handle(timer.id, user_id).await;
        assert!(matches!(result, Err(PauseTimerError::NotRunning)));
    }
}
