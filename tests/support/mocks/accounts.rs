// tests/support/mocks/accounts.rs
use async_trait::async_trait;
use std::sync::Mutex;
use storefront_core::domain::{
    account::{Account, AccountId, AccountRepository, Email, NewAccount, PasswordHash, Role},
    errors::{DomainError, DomainResult},
};

#[derive(Default)]
pub struct InMemoryAccounts {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    /// Seeds an account whose password verifies with `PlainPasswordHasher`.
    pub fn seed(&self, email: &str, password: &str, role: Role, is_active: bool) -> Account {
        let mut accounts = self.accounts.lock().unwrap();
        let account = Account {
            id: AccountId::new(accounts.len() as i64 + 1).unwrap(),
            email: Email::new(email).unwrap(),
            display_name: None,
            password_hash: PasswordHash::new(format!("plain:{password}")).unwrap(),
            role,
            is_active,
            created_at: super::fixed_now(),
        };
        accounts.push(account.clone());
        account
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let created = Account {
            id: AccountId::new(accounts.len() as i64 + 1)?,
            email: account.email,
            display_name: account.display_name,
            password_hash: account.password_hash,
            role: account.role,
            is_active: true,
            created_at: account.created_at,
        };
        accounts.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| &a.email == email).cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}
