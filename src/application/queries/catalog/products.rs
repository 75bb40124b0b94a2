// src/application/queries/catalog/products.rs
use super::{CatalogQueryService, service::parse_slug};
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductFilter,
};

pub struct ListProductsQuery {
    /// Category slug.
    pub category: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl CatalogQueryService {
    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let mut filter = ProductFilter::new(query.limit, query.offset);

        if let Some(raw) = query.category.as_deref() {
            let category = match parse_slug(raw) {
                Some(slug) => self.categories.find_live_by_slug(&slug).await?,
                None => None,
            };
            match category {
                Some(category) => filter = filter.in_category(category.id),
                None => return Ok(Vec::new()),
            }
        }

        let products = self.products.list(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> ApplicationResult<ProductDto> {
        let not_found = || ApplicationError::not_found("product not found");
        let slug = parse_slug(slug).ok_or_else(not_found)?;
        self.products
            .find_visible_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
