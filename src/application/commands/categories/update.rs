// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::{SlugChange, guard::ensure_admin, guard::tidy_description},
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::{
        account::AdminSession,
        category::{CategoryId, CategoryTitle, CategoryUpdate},
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub slug: SlugChange,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AdminSession,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor)?;

        let id = CategoryId::new(command.id)?;
        let category = self.load_live(id).await?;
        let title = command.title.map(CategoryTitle::new).transpose()?;

        let mut update = CategoryUpdate::new(id, self.clock.now());
        if let Some(title) = &title {
            update = update.with_title(title.clone());
        }
        if let Some(description) = command.description {
            update = update.with_description(tidy_description(description));
        }

        let effective_title = title.as_ref().unwrap_or(&category.title);
        let updated = match command.slug.source(effective_title.as_str()) {
            None => self.write_repo.update(update).await?,
            Some(source) => {
                self.slugs
                    .commit(&self.slug_scope, source, Some(id), |slug| {
                        self.write_repo.update(update.clone().with_slug(slug))
                    })
                    .await?
            }
        };

        if updated.slug != category.slug {
            tracing::info!(
                category_id = %id,
                from = %category.slug,
                to = %updated.slug,
                "category slug changed"
            );
        }
        Ok(updated.into())
    }
}
