// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{session::SessionStore, time::Clock},
};
use crate::domain::account::AdminSession;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

struct Entry {
    session: AdminSession,
    expires_at: DateTime<Utc>,
}

/// Process-local session store, used when no Redis URL is configured.
pub struct InMemorySessionStore {
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemorySessionStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        session_id: &str,
        session: &AdminSession,
        ttl: Duration,
    ) -> ApplicationResult<()> {
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let now = self.clock.now();
        let mut entries = self.entries()?;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            session_id.to_owned(),
            Entry {
                session: session.clone(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, session_id: &str) -> ApplicationResult<Option<AdminSession>> {
        let now = self.clock.now();
        let mut entries = self.entries()?;
        match entries.get(session_id) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.session.clone())),
            Some(_) => {
                entries.remove(session_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, session_id: &str) -> ApplicationResult<()> {
        self.entries()?.remove(session_id);
        Ok(())
    }
}
