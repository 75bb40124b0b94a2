// tests/support/mocks/security.rs
use async_trait::async_trait;
use storefront_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Reversible "hash" so tests skip Argon2's cost.
#[derive(Clone, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
