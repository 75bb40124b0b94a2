// src/application/queries/catalog/admin.rs
use super::CatalogQueryService;
use crate::{
    application::{
        commands::guard::ensure_admin,
        dto::{CategoryDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AdminSession,
        category::CategoryId,
        product::{ProductFilter, ProductId},
    },
};

pub struct AdminListProductsQuery {
    pub category_id: Option<i64>,
    pub limit: u32,
    pub offset: u32,
}

impl CatalogQueryService {
    pub async fn admin_list_categories(
        &self,
        actor: &AdminSession,
        include_deleted: bool,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        ensure_admin(actor)?;
        let categories = self.categories.list(include_deleted).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Admins also see products filed under soft-deleted categories.
    pub async fn admin_list_products(
        &self,
        actor: &AdminSession,
        query: AdminListProductsQuery,
    ) -> ApplicationResult<Vec<ProductDto>> {
        ensure_admin(actor)?;
        let mut filter =
            ProductFilter::new(query.limit, query.offset).including_deleted_categories();
        if let Some(raw) = query.category_id {
            filter = filter.in_category(CategoryId::new(raw)?);
        }
        let products = self.products.list(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn admin_get_product(
        &self,
        actor: &AdminSession,
        id: i64,
    ) -> ApplicationResult<ProductDto> {
        ensure_admin(actor)?;
        let id = ProductId::new(id)?;
        self.products
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
