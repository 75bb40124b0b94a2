// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{
            Category, CategoryId, CategoryReadRepository, CategorySlugScope,
            CategoryWriteRepository,
        },
        slug::UniqueSlugResolver,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_scope: CategorySlugScope,
    pub(super) slugs: Arc<UniqueSlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slugs: Arc<UniqueSlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_scope = CategorySlugScope::new(Arc::clone(&read_repo));
        Self {
            write_repo,
            read_repo,
            slug_scope,
            slugs,
            clock,
        }
    }

    pub(super) async fn load_live(&self, id: CategoryId) -> ApplicationResult<Category> {
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(Category::is_live)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
