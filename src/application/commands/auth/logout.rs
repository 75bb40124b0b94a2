// src/application/commands/auth/logout.rs
use super::AuthCommandService;
use crate::application::error::ApplicationResult;

impl AuthCommandService {
    /// Drops the stored session. Unknown or forged tokens are ignored.
    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        if let Some(session_id) = self.signer.verify(token) {
            self.sessions.remove(&session_id).await?;
        }
        Ok(())
    }
}
