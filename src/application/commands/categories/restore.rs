// src/application/commands/categories/restore.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::guard::ensure_admin,
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{account::AdminSession, category::CategoryId},
};

pub struct RestoreCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Brings a soft-deleted category back. If a live category took its slug
    /// in the meantime, the next free suffix of that slug is assigned.
    pub async fn restore_category(
        &self,
        actor: &AdminSession,
        command: RestoreCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor)?;

        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        if category.is_live() {
            return Err(ApplicationError::conflict("category is not deleted"));
        }

        let now = self.clock.now();
        let restored = self
            .slugs
            .commit(&self.slug_scope, category.slug.as_str(), Some(id), |slug| {
                self.write_repo.restore(id, slug, now)
            })
            .await?;

        tracing::info!(category_id = %id, slug = %restored.slug, "category restored");
        Ok(restored.into())
    }
}
