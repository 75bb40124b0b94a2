// src/domain/account/session.rs
use crate::domain::account::entity::Account;
use crate::domain::account::value_objects::{AccountId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload kept in the session store for a signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub account_id: AccountId,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn for_account(account: &Account, issued_at: DateTime<Utc>) -> Self {
        Self {
            account_id: account.id,
            email: account.email.to_string(),
            role: account.role,
            display_name: account.display_name.clone(),
            issued_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
