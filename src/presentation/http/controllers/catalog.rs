// src/presentation/http/controllers/catalog.rs
use super::default_limit;
use crate::application::{
    dto::{CategoryDto, CategoryPageDto, ProductDto},
    queries::catalog::{GetCategoryPageQuery, ListProductsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Category slug to filter by.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "Live categories.", body = [CategoryDto])),
    tag = "Catalog"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug"), PageParams),
    responses(
        (status = 200, description = "Category with its products.", body = CategoryPageDto),
        (status = 404, description = "No live category has this slug.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CategoryPageDto>> {
    state
        .services
        .catalog_queries
        .get_category_page(GetCategoryPageQuery {
            slug,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses((status = 200, description = "Products in live categories.", body = [ProductDto])),
    tag = "Catalog"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .catalog_queries
        .list_products(ListProductsQuery {
            category: params.category,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product detail.", body = ProductDto),
        (status = 404, description = "Unknown product or deleted category.", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .catalog_queries
        .get_product_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}
