// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{admin_categories, admin_products, auth, catalog};
use crate::presentation::http::state::SESSION_COOKIE;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::list_categories,
        catalog::get_category,
        catalog::list_products,
        catalog::get_product,
        auth::login,
        auth::logout,
        auth::me,
        admin_categories::list_categories,
        admin_categories::create_category,
        admin_categories::update_category,
        admin_categories::delete_category,
        admin_categories::restore_category,
        admin_products::list_products,
        admin_products::get_product,
        admin_products::create_product,
        admin_products::update_product,
        admin_products::delete_product,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            catalog::PageParams,
            catalog::ProductListParams,
            auth::LoginRequest,
            auth::LoginResponse,
            admin_categories::AdminCategoryListParams,
            admin_categories::CreateCategoryRequest,
            admin_categories::UpdateCategoryRequest,
            admin_products::AdminProductListParams,
            admin_products::CreateProductRequest,
            admin_products::UpdateProductRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryPageDto,
            crate::application::dto::ProductDto,
            crate::application::dto::SessionDto
        )
    ),
    tags(
        (name = "Catalog", description = "Public storefront browsing"),
        (name = "Auth", description = "Admin sign-in and sessions"),
        (name = "Admin", description = "Catalog management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Storefront API",
        description = "Catalog, admin panel and storefront browsing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::temporary("/docs") }))
}

/// Writes the OpenAPI document as pretty-printed JSON, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
