// src/application/queries/catalog/categories.rs
use super::{CatalogQueryService, service::parse_slug};
use crate::{
    application::{
        dto::{CategoryDto, CategoryPageDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductFilter,
};

pub struct GetCategoryPageQuery {
    pub slug: String,
    pub limit: u32,
    pub offset: u32,
}

impl CatalogQueryService {
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list(false).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_page(
        &self,
        query: GetCategoryPageQuery,
    ) -> ApplicationResult<CategoryPageDto> {
        let not_found = || ApplicationError::not_found("category not found");
        let slug = parse_slug(&query.slug).ok_or_else(not_found)?;
        let category = self
            .categories
            .find_live_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let filter = ProductFilter::new(query.limit, query.offset).in_category(category.id);
        let products = self.products.list(filter).await?;

        Ok(CategoryPageDto {
            category: category.into(),
            products: products.into_iter().map(ProductDto::from).collect(),
        })
    }
}
