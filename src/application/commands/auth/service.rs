// src/application/commands/auth/service.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, SessionTokenSigner},
            session::SessionStore,
            time::Clock,
        },
    },
    domain::account::{AccountRepository, AdminSession},
};

pub struct AuthCommandService {
    pub(super) accounts: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) sessions: Arc<dyn SessionStore>,
    pub(super) signer: Arc<dyn SessionTokenSigner>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) session_ttl: Duration,
}

impl AuthCommandService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        signer: Arc<dyn SessionTokenSigner>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            accounts,
            password_hasher,
            sessions,
            signer,
            clock,
            session_ttl,
        }
    }

    /// Resolve a signed session token into the stored session payload.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AdminSession> {
        let session_id = self
            .signer
            .verify(token)
            .ok_or_else(|| ApplicationError::unauthorized("invalid session token"))?;

        self.sessions
            .get(&session_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session expired"))
    }

    /// `authenticate` plus the admin role check guarding the admin panel.
    pub async fn authorize_admin(&self, token: &str) -> ApplicationResult<AdminSession> {
        let session = self.authenticate(token).await?;
        if !session.is_admin() {
            tracing::warn!(account_id = session.account_id.0, role = %session.role, "admin access denied");
            return Err(ApplicationError::forbidden("administrator role required"));
        }
        Ok(session)
    }
}
