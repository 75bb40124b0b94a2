// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session::SessionStore;
use crate::domain::account::AdminSession;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

const KEY_PREFIX: &str = "storefront:session:";

/// Session payloads stored as JSON under a per-session key with a Redis TTL.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key(session_id: &str) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        session_id: &str,
        session: &AdminSession,
        ttl: Duration,
    ) -> ApplicationResult<()> {
        let payload = serde_json::to_string(session)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key(session_id), payload, ttl.as_secs().max(1))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn
            .get(key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        match payload {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(session) => Ok(Some(session)),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable session payload");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn remove(&self, session_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
