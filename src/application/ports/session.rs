// src/application/ports/session.rs
use crate::application::ApplicationResult;
use crate::domain::account::AdminSession;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, session_id: &str, session: &AdminSession, ttl: Duration)
    -> ApplicationResult<()>;

    /// Expired sessions are reported as absent.
    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>>;

    async fn remove(&self, session_id: &str) -> ApplicationResult<()>;
}
