// src/infrastructure/repositories/postgres_account.rs
use super::map_sqlx;
use crate::domain::account::{
    Account, AccountId, AccountRepository, Email, NewAccount, PasswordHash, Role,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    display_name: Option<String>,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id)?,
            email: Email::new(row.email)?,
            display_name: row.display_name,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (email, display_name, password_hash, role, is_active, created_at)
             VALUES ($1, $2, $3, $4, TRUE, $5)
             RETURNING id, email, display_name, password_hash, role, is_active, created_at",
        )
        .bind(account.email.as_str())
        .bind(account.display_name)
        .bind(account.password_hash.as_str())
        .bind(account.role.as_str())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Account::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, display_name, password_hash, role, is_active, created_at
             FROM accounts WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, display_name, password_hash, role, is_active, created_at
             FROM accounts WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }
}
