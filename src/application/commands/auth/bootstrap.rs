// src/application/commands/auth/bootstrap.rs
use super::AuthCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::account::{Email, NewAccount, PasswordHash, Role},
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct BootstrapAdminCommand {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

impl AuthCommandService {
    /// Creates the configured administrator unless the address is taken.
    /// Returns whether an account was created.
    pub async fn bootstrap_admin(&self, command: BootstrapAdminCommand) -> ApplicationResult<bool> {
        let email = Email::new(command.email)?;
        if command.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApplicationError::validation(format!(
                "admin password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let account = self
            .accounts
            .insert(NewAccount {
                email,
                display_name: command.display_name,
                password_hash: PasswordHash::new(hashed)?,
                role: Role::Admin,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(account_id = account.id.0, email = %account.email, "bootstrap admin created");
        Ok(true)
    }
}
