// src/application/commands/auth/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::SignedSession,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, AdminSession, Email},
};
use chrono::Duration as ChronoDuration;
use uuid::Uuid;

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<SignedSession> {
        // A malformed address cannot belong to an account.
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let account = self
            .find_and_authenticate(&email, &command.password)
            .await?;

        let issued_at = self.clock.now();
        let session = AdminSession::for_account(&account, issued_at);
        let session_id = Uuid::new_v4().to_string();
        self.sessions
            .put(&session_id, &session, self.session_ttl)
            .await?;

        let ttl = ChronoDuration::from_std(self.session_ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::info!(account_id = account.id.0, role = %account.role, "signed in");
        Ok(SignedSession {
            token: self.signer.sign(&session_id),
            session,
            expires_at: issued_at + ttl,
        })
    }

    async fn find_and_authenticate(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<Account> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, account.password_hash.as_str())
            .await?;

        if !account.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        Ok(account)
    }
}
