// src/application/commands/products/update.rs
use super::ProductCommandService;
use crate::{
    application::{
        commands::{SlugChange, guard::ensure_admin, guard::tidy_description},
        dto::ProductDto,
        error::ApplicationResult,
    },
    domain::{
        account::AdminSession,
        product::{Price, ProductId, ProductTitle, ProductUpdate, Stock},
    },
};

#[derive(Default)]
pub struct UpdateProductCommand {
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
    pub slug: SlugChange,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AdminSession,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_admin(actor)?;

        let id = ProductId::new(command.id)?;
        let product = self.load(id).await?;

        let title = command.title.map(ProductTitle::new).transpose()?;
        let price = command.price.map(Price::new).transpose()?;
        let stock = command.stock.map(Stock::new).transpose()?;

        let mut update = ProductUpdate::new(id, self.clock.now());
        if let Some(raw_category) = command.category_id {
            update = update.with_category(self.ensure_live_category(raw_category).await?);
        }
        if let Some(title) = &title {
            update = update.with_title(title.clone());
        }
        if let Some(description) = command.description {
            update = update.with_description(tidy_description(description));
        }
        if let Some(price) = price {
            update = update.with_price(price);
        }
        if let Some(stock) = stock {
            update = update.with_stock(stock);
        }

        let effective_title = title.as_ref().unwrap_or(&product.title);
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

        if updated.slug != product.slug {
            tracing::info!(
                product_id = %id,
                from = %product.slug,
                to = %updated.slug,
                "product slug changed"
            );
        }
        Ok(updated.into())
    }
}
