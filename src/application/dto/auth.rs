use crate::domain::account::{AdminSession, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub account_id: i64,
    pub email: String,
    #[schema(value_type = String, example = "admin")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl From<AdminSession> for SessionDto {
    fn from(session: AdminSession) -> Self {
        Self {
            account_id: session.account_id.into(),
            email: session.email,
            role: session.role,
            display_name: session.display_name,
            issued_at: session.issued_at,
        }
    }
}

/// Successful sign-in: the signed token goes into the session cookie.
#[derive(Debug, Clone)]
pub struct SignedSession {
    pub token: String,
    pub session: AdminSession,
    pub expires_at: DateTime<Utc>,
}
