// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{commands::guard::ensure_admin, error::ApplicationResult},
    domain::{account::AdminSession, category::CategoryId},
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Soft delete: the slug becomes available to other categories.
    pub async fn delete_category(
        &self,
        actor: &AdminSession,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let id = CategoryId::new(command.id)?;
        let category = self.load_live(id).await?;
        self.write_repo.soft_delete(id, self.clock.now()).await?;

        tracing::info!(category_id = %id, slug = %category.slug, "category deleted");
        Ok(())
    }
}
