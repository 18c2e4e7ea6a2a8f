// Authentication collaborator.
//
// Session issuance and credential storage live outside this service; the
// core only needs "the authenticated user id for this request", resolved
// from the bearer token.

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn user_id_for_token(&self, token: &str) -> anyhow::Result<Option<Uuid>>;
}

pub mod in_memory;
