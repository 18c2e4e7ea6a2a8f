// In memory implementation of the TimerStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Hold active timers keyed by id.
// - Enforce the one-active-timer-per-user uniqueness inside a single write
//   lock, mirroring a unique index on (user_id, status).

use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use crate::shared::infrastructure::timer_store::{TimerStore, TimerStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTimerStore {
    inner: RwLock<HashMap<Uuid, TimerRecord>>,
    offline: std::sync::atomic::AtomicBool,
}

impl InMemoryTimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a backend error, for StorageFailure tests.
    pub fn toggle_offline(&self) {
        let current = self.offline.load(std::sync::atomic::Ordering::SeqCst);
        self.offline
            .store(!current, std::sync::atomic::Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), TimerStoreError> {
        if self.offline.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(TimerStoreError::Backend("Timer store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimerStore for InMemoryTimerStore {
    async fn insert_active(&self, timer: TimerRecord) -> Result<(), TimerStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        if guard.values().any(|t| t.user_id == timer.user_id) {
            return Err(TimerStoreError::DuplicateActive {
                user_id: timer.user_id,
            });
        }
        guard.insert(timer.id, timer);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TimerRecord>, TimerStoreError> {
        self.check_online()?;
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn find_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TimerRecord>, TimerStoreError> {
        self.check_online()?;
        Ok(self
            .inner
            .read()
            .await
            .get(&id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }

    async fn find_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TimerRecord>, TimerStoreError> {
        self.check_online()?;
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn update_guarded(
        &self,
        timer: TimerRecord,
        expected: TimerStatus,
    ) -> Result<bool, TimerStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        match guard.get(&timer.id) {
            Some(current) if current.status == expected => {
                guard.insert(timer.id, timer);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TimerStoreError> {
        self.check_online()?;
        Ok(self.inner.write().await.remove(&id).is_some())
    }
}
