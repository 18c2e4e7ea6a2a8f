// In memory implementation of the ProjectStore port.

use crate::modules::projects::core::project::{ProjectDisplay, ProjectRecord};
use crate::shared::infrastructure::project_store::{
    ProjectPatch, ProjectStore, ProjectStoreError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryProjectStore {
    inner: RwLock<HashMap<Uuid, ProjectRecord>>,
    offline: AtomicBool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.store(!self.offline.load(Ordering::SeqCst), Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), ProjectStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ProjectStoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert(&self, project: ProjectRecord) -> Result<(), ProjectStoreError> {
        self.check_online()?;
        self.inner.write().await.insert(project.id, project);
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ProjectRecord>, ProjectStoreError> {
        self.check_online()?;
        let mut projects: Vec<ProjectRecord> = self
            .inner
            .read()
            .await
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn find_by_id_and_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ProjectRecord>, ProjectStoreError> {
        self.check_online()?;
        Ok(self
            .inner
            .read()
            .await
            .get(&id)
            .filter(|p| p.user_id == user_id)
            .cloned())
    }

    async fn display_info(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, ProjectDisplay>, ProjectStoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| {
                guard.get(id).map(|p| {
                    (
                        *id,
                        ProjectDisplay {
                            name: p.name.clone(),
                            color: p.color.clone(),
                        },
                    )
                })
            })
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Option<ProjectRecord>, ProjectStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let Some(project) = guard.get_mut(&id).filter(|p| p.user_id == user_id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(description) = patch.description {
            project.description = Some(description);
        }
        if let Some(color) = patch.color {
            project.color = Some(color);
        }
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, ProjectStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        match guard.get(&id) {
            Some(p) if p.user_id == user_id => {
                guard.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
