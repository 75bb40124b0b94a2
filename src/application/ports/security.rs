// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Binds session ids to the server secret so clients cannot forge them.
pub trait SessionTokenSigner: Send + Sync {
    fn sign(&self, session_id: &str) -> String;
    /// Returns the session id when the token carries a valid signature.
    fn verify(&self, token: &str) -> Option<String>;
}
