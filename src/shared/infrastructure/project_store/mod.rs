use crate::modules::projects::core::project::{ProjectDisplay, ProjectRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Partial update applied by `update`; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert(&self, project: ProjectRecord) -> Result<(), ProjectStoreError>;

    /// Owner's projects, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ProjectRecord>, ProjectStoreError>;

    async fn find_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ProjectRecord>, ProjectStoreError>;

    /// Display attributes for response enrichment; absent ids are simply
    /// missing from the map (the project may have been deleted).
    async fn display_info(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, ProjectDisplay>, ProjectStoreError>;

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Option<ProjectRecord>, ProjectStoreError>;

    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, ProjectStoreError>;
}

pub mod in_memory;
