// src/domain/product/slug_scope.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::product::repository::ProductReadRepository;
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::{Slug, SlugScope};

#[derive(Clone)]
pub struct ProductSlugScope {
    read_repo: Arc<dyn ProductReadRepository>,
}

impl ProductSlugScope {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugScope for ProductSlugScope {
    type Id = ProductId;

    fn collection(&self) -> &'static str {
        "products"
    }

    fn placeholder(&self) -> &'static str {
        "product"
    }

    async fn slug_taken(&self, slug: &Slug, exclude: Option<ProductId>) -> DomainResult<bool> {
        self.read_repo.slug_exists(slug, exclude).await
    }
}
