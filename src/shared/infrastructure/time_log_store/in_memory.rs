// In memory implementation of the TimeLogStore port.

use crate::modules::time_logs::core::time_log::TimeLogRecord;
use crate::shared::infrastructure::time_log_store::{
    TimeLogFilter, TimeLogStore, TimeLogStoreError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTimeLogStore {
    inner: RwLock<Vec<TimeLogRecord>>,
    offline: AtomicBool,
}

impl InMemoryTimeLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a backend error, for StorageFailure tests.
    pub fn toggle_offline(&self) {
        self.offline.store(!self.offline.load(Ordering::SeqCst), Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), TimeLogStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(TimeLogStoreError::Backend("Time log store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeLogStore for InMemoryTimeLogStore {
    async fn insert(&self, log: TimeLogRecord) -> Result<(), TimeLogStoreError> {
        self.check_online()?;
        self.inner.write().await.push(log);
        Ok(())
    }

    async fn find(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLogRecord>, TimeLogStoreError> {
        self.check_online()?;
        Ok(self
            .inner
            .read()
            .await
            .iter()
            .filter(|log| filter.matches(log))
            .cloned()
            .collect())
    }

    async fn delete_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TimeLogStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|log| !(log.id == id && log.user_id == user_id));
        Ok(guard.len() < before)
    }

    async fn delete_by_project(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, TimeLogStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|log| !(log.project_id == project_id && log.user_id == user_id));
        Ok((before - guard.len()) as u64)
    }
}
