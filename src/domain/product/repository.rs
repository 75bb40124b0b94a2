use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductFilter, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when another product holds the slug.
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    /// Only products whose category is live.
    async fn find_visible_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>>;
    async fn slug_exists(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool>;
}
