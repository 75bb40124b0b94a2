// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::{
    application::{
        commands::{guard::ensure_admin, guard::tidy_description, slug_change::creation_source},
        dto::ProductDto,
        error::ApplicationResult,
    },
    domain::{
        account::AdminSession,
        product::{NewProduct, Price, ProductTitle, Stock},
    },
};

pub struct CreateProductCommand {
    pub category_id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AdminSession,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_admin(actor)?;

        let title = ProductTitle::new(command.title)?;
        let price = Price::new(command.price)?;
        let stock = Stock::new(command.stock)?;
        let description = tidy_description(command.description);
        let category_id = self.ensure_live_category(command.category_id).await?;
        let source = creation_source(command.slug.as_deref(), title.as_str()).to_string();
        let now = self.clock.now();

        let created = self
            .slugs
            .commit(&self.slug_scope, &source, None, |slug| {
                self.write_repo.insert(NewProduct {
                    category_id,
                    title: title.clone(),
                    slug,
                    description: description.clone(),
                    price,
                    stock,
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(
            product_id = %created.id,
            category_id = %created.category_id,
            slug = %created.slug,
            "product created"
        );
        Ok(created.into())
    }
}
