// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_live_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG => {
                        DomainError::DuplicateSlug("category slug already exists".into())
                    }
                    CNT_PRODUCT_SLUG => {
                        DomainError::DuplicateSlug("product slug already exists".into())
                    }
                    CNT_ACCOUNT_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => DomainError::Unavailable(err.to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
