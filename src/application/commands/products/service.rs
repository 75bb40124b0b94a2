// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{Category, CategoryId, CategoryReadRepository},
        product::{
            Product, ProductId, ProductReadRepository, ProductSlugScope, ProductWriteRepository,
        },
        slug::UniqueSlugResolver,
    },
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) categories: Arc<dyn CategoryReadRepository>,
    pub(super) slug_scope: ProductSlugScope,
    pub(super) slugs: Arc<UniqueSlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        categories: Arc<dyn CategoryReadRepository>,
        slugs: Arc<UniqueSlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_scope = ProductSlugScope::new(Arc::clone(&read_repo));
        Self {
            write_repo,
            read_repo,
            categories,
            slug_scope,
            slugs,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ProductId) -> ApplicationResult<Product> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }

    /// Products can only be filed under live categories.
    pub(super) async fn ensure_live_category(&self, raw_id: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(raw_id)?;
        self.categories
            .find_by_id(id)
            .await?
            .filter(Category::is_live)
            .map(|category| category.id)
            .ok_or_else(|| ApplicationError::not_found(format!("category {id} not found")))
    }
}
