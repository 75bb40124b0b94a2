// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_categories, admin_products, auth, catalog},
    middleware::{login_rate_limit_layer, require_admin},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Router-level settings taken from `AppConfig`.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub login_rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            request_timeout: Duration::from_secs(30),
            login_rate_limit: true,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

fn admin_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/admin/categories",
            get(admin_categories::list_categories).post(admin_categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            put(admin_categories::update_category).delete(admin_categories::delete_category),
        )
        .route(
            "/api/v1/admin/categories/{id}/restore",
            post(admin_categories::restore_category),
        )
        .route(
            "/api/v1/admin/products",
            get(admin_products::list_products).post(admin_products::create_product),
        )
        .route(
            "/api/v1/admin/products/{id}",
            get(admin_products::get_product)
                .put(admin_products::update_product)
                .delete(admin_products::delete_product),
        )
        .route_layer(middleware::from_fn(require_admin))
}

fn auth_routes(rate_limit: bool) -> Router {
    let mut login = Router::new().route("/api/v1/admin/login", post(auth::login));
    if rate_limit {
        match login_rate_limit_layer() {
            Some(layer) => login = login.layer(layer),
            None => tracing::warn!("login rate limit configuration rejected; limiter disabled"),
        }
    }

    Router::new()
        .merge(login)
        .route("/api/v1/admin/logout", post(auth::logout))
        .route("/api/v1/admin/me", get(auth::me))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/categories", get(catalog::list_categories))
        .route("/api/v1/categories/{slug}", get(catalog::get_category))
        .route("/api/v1/products", get(catalog::list_products))
        .route("/api/v1/products/{slug}", get(catalog::get_product))
        .merge(auth_routes(options.login_rate_limit))
        .merge(admin_routes())
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
