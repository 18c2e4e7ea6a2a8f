use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TimerStoreError {
    #[error("an active timer already exists for user {user_id}")]
    DuplicateActive { user_id: Uuid },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimerStore: Send + Sync {
    /// Conditional insert: rejects with `DuplicateActive` when the user
    /// already holds a running or paused timer. This is the store-level
    /// uniqueness guard behind the at-most-one-active-timer invariant, so
    /// concurrent starts cannot both succeed.
    async fn insert_active(&self, timer: TimerRecord) -> Result<(), TimerStoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TimerRecord>, TimerStoreError>;

    async fn find_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TimerRecord>, TimerStoreError>;

    async fn find_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TimerRecord>, TimerStoreError>;

    /// Replaces the stored record only while its current status still
    /// matches `expected`. Returns false when the record is gone or the
    /// guard fails, so a racing pause/stop loses cleanly instead of
    /// clobbering state.
    async fn update_guarded(
        &self,
        timer: TimerRecord,
        expected: TimerStatus,
    ) -> Result<bool, TimerStoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, TimerStoreError>;
}

pub mod in_memory;
