// In memory implementation of the SessionStore port, seeded by tests and
// local development.

use crate::shared::infrastructure::session_store::SessionStore;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemorySessionStore {
    tokens: RwLock<HashMap<String, Uuid>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issue(&self, token: impl Into<String>, user_id: Uuid) {
        self.tokens.write().await.insert(token.into(), user_id);
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn user_id_for_token(&self, token: &str) -> anyhow::Result<Option<Uuid>> {
        Ok(self.tokens.read().await.get(token).copied())
    }
}
