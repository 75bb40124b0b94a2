// src/presentation/http/controllers/admin_products.rs
use super::{default_limit, double_option};
use crate::application::{
    commands::{
        SlugChange,
        products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    },
    dto::ProductDto,
    queries::catalog::AdminListProductsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentAdmin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminProductListParams {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub category_id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    #[serde(default)]
    pub stock: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    /// Absent keeps the slug, blank regenerates it from the title.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub stock: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    params(AdminProductListParams),
    responses(
        (status = 200, description = "Products, including those in deleted categories.", body = [ProductDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "Not an administrator.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Query(params): Query<AdminProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    let query = AdminListProductsQuery {
        category_id: params.category_id,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .catalog_queries
        .admin_list_products(&admin, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail.", body = ProductDto),
        (status = 404, description = "Unknown product.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .catalog_queries
        .admin_get_product(&admin, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Unknown or deleted category.", body = ErrorResponse),
        (status = 409, description = "No unique slug could be assigned.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        category_id: payload.category_id,
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
    };

    state
        .services
        .product_commands
        .create_product(&admin, command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 404, description = "Unknown product or category.", body = ErrorResponse),
        (status = 409, description = "No unique slug could be assigned.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        category_id: payload.category_id,
        title: payload.title,
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
        slug: SlugChange::from_field(payload.slug),
    };

    state
        .services
        .product_commands
        .update_product(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted."),
        (status = 404, description = "Unknown product.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .product_commands
        .delete_product(&admin, DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
