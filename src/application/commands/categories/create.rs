// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::{guard::ensure_admin, guard::tidy_description, slug_change::creation_source},
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::{
        account::AdminSession,
        category::{CategoryTitle, NewCategory},
    },
};

pub struct CreateCategoryCommand {
    pub title: String,
    /// Optional slug source; the title is used when absent or blank.
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AdminSession,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor)?;

        let title = CategoryTitle::new(command.title)?;
        let description = tidy_description(command.description);
        let source = creation_source(command.slug.as_deref(), title.as_str()).to_string();
        let now = self.clock.now();

        let created = self
            .slugs
            .commit(&self.slug_scope, &source, None, |slug| {
                self.write_repo.insert(NewCategory {
                    title: title.clone(),
                    slug,
                    description: description.clone(),
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
