// src/presentation/http/controllers/admin_categories.rs
use super::double_option;
use crate::application::{
    commands::{
        SlugChange,
        categories::{
            CreateCategoryCommand, DeleteCategoryCommand, RestoreCategoryCommand,
            UpdateCategoryCommand,
        },
    },
    dto::CategoryDto,
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
pub struct AdminCategoryListParams {
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub title: String,
    /// Custom slug text; derived from the title when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// Absent keeps the slug, blank regenerates it from the title.
    #[serde(default)]
    pub slug: Option<String>,
    /// `null` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories",
    params(AdminCategoryListParams),
    responses(
        (status = 200, description = "All categories.", body = [CategoryDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 403, description = "Not an administrator.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Query(params): Query<AdminCategoryListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .admin_list_categories(&admin, params.include_deleted)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "No unique slug could be assigned.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
    };

    state
        .services
        .category_commands
        .create_category(&admin, command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 404, description = "No live category with this id.", body = ErrorResponse),
        (status = 409, description = "No unique slug could be assigned.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        title: payload.title,
        description: payload.description,
        slug: SlugChange::from_field(payload.slug),
    };

    state
        .services
        .category_commands
        .update_category(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category soft deleted."),
        (status = 404, description = "No live category with this id.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(&admin, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories/{id}/restore",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category restored, possibly under a new slug.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Category is not deleted.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn restore_category(
    Extension(state): Extension<HttpState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .restore_category(&admin, RestoreCategoryCommand { id })
        .await
        .into_http()
        .map(Json)
}
