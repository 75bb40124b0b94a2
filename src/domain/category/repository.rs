use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when a live category already holds the slug.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Only live categories can be updated.
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn soft_delete(&self, id: CategoryId, at: DateTime<Utc>) -> DomainResult<()>;
    async fn restore(&self, id: CategoryId, slug: Slug, at: DateTime<Utc>) -> DomainResult<Category>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    /// Returns soft-deleted categories too.
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_live_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn list(&self, include_deleted: bool) -> DomainResult<Vec<Category>>;
    async fn live_slug_exists(
        &self,
        slug: &Slug,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool>;
}
