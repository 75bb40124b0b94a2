// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// A write hit the storage-level slug uniqueness constraint.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("no free {collection} slug for '{base}' after {attempts} attempts")]
    SlugExhausted {
        collection: &'static str,
        base: String,
        attempts: u32,
    },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence unavailable: {0}")]
    Unavailable(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
