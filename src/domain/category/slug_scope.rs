// src/domain/category/slug_scope.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryReadRepository;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugScope};

/// Slug uniqueness over live (not soft-deleted) categories.
#[derive(Clone)]
pub struct CategorySlugScope {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategorySlugScope {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }
}

#[async_trait]
impl SlugScope for CategorySlugScope {
    type Id = CategoryId;

    fn collection(&self) -> &'static str {
        "categories"
    }

    fn placeholder(&self) -> &'static str {
        "category"
    }

    async fn slug_taken(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<bool> {
        self.read_repo.live_slug_exists(slug, exclude).await
    }
}
