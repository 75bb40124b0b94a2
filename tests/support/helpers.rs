// tests/support/helpers.rs
use super::mocks::{DummyClock, InMemoryAccounts, InMemoryCatalog, PlainPasswordHasher};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use storefront_core::application::{
    ports::ClockPort,
    services::{Adapters, ApplicationServices, Repositories, ServiceSettings},
};
use storefront_core::domain::{
    account::{AdminSession, Role},
    category::{CategoryReadRepository, CategoryWriteRepository},
    slug::SlugPolicy,
};
use storefront_core::infrastructure::{
    security::{HmacSessionSigner, InMemorySessionStore},
    util::DefaultSlugGenerator,
};
use storefront_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{HttpState, SessionCookieSettings},
};
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-secret!!";
pub const ADMIN_EMAIL: &str = "admin@shop.test";
pub const ADMIN_PASSWORD: &str = "admin-password";
pub const CUSTOMER_EMAIL: &str = "customer@shop.test";
pub const CUSTOMER_PASSWORD: &str = "customer-password";

/// Services over in-memory storage, plus handles for seeding and inspection.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub catalog: Arc<InMemoryCatalog>,
    pub accounts: Arc<InMemoryAccounts>,
}

pub struct TestOverrides {
    pub policy: SlugPolicy,
    pub category_write: Option<Arc<dyn CategoryWriteRepository>>,
    pub category_read: Option<Arc<dyn CategoryReadRepository>>,
}

impl Default for TestOverrides {
    fn default() -> Self {
        Self {
            policy: SlugPolicy::default(),
            category_write: None,
            category_read: None,
        }
    }
}

pub fn build_context() -> TestContext {
    build_context_with(TestOverrides::default())
}

pub fn build_context_with(overrides: TestOverrides) -> TestContext {
    let catalog = InMemoryCatalog::new();
    let accounts = Arc::new(InMemoryAccounts::default());
    accounts.seed(ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin, true);
    accounts.seed(CUSTOMER_EMAIL, CUSTOMER_PASSWORD, Role::Customer, true);

    let category_read: Arc<dyn CategoryReadRepository> = overrides
        .category_read
        .unwrap_or_else(|| catalog.clone() as Arc<dyn CategoryReadRepository>);
    let repos = Repositories {
        accounts: accounts.clone(),
        category_write: overrides
            .category_write
            .unwrap_or_else(|| catalog.clone() as Arc<dyn CategoryWriteRepository>),
        category_read,
        product_write: catalog.clone(),
        product_read: catalog.clone(),
    };

    let clock: Arc<ClockPort> = Arc::new(DummyClock);
    let adapters = Adapters {
        password_hasher: Arc::new(PlainPasswordHasher),
        sessions: Arc::new(InMemorySessionStore::new(Arc::clone(&clock))),
        signer: Arc::new(HmacSessionSigner::new(TEST_SECRET).expect("hmac key")),
        clock,
        slugger: Arc::new(DefaultSlugGenerator),
    };
    let settings = ServiceSettings {
        slug_policy: overrides.policy,
        session_ttl: Duration::from_secs(3600),
    };

    TestContext {
        services: Arc::new(ApplicationServices::new(repos, adapters, settings)),
        catalog,
        accounts,
    }
}

impl TestContext {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            session_cookie: SessionCookieSettings {
                secure: false,
                max_age: Duration::from_secs(3600),
            },
        };
        let options = RouterOptions {
            login_rate_limit: false,
            ..RouterOptions::default()
        };
        build_router(state, &options)
    }

    /// Signs in through the auth service and returns the signed token.
    pub async fn token_for(&self, email: &str, password: &str) -> String {
        self.services
            .auth
            .login(storefront_core::application::commands::auth::LoginCommand {
                email: email.into(),
                password: password.into(),
            })
            .await
            .expect("login")
            .token
    }

    pub async fn admin(&self) -> AdminSession {
        let token = self.token_for(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        self.services.auth.authenticate(&token).await.expect("admin session")
    }

    pub async fn customer(&self) -> AdminSession {
        let token = self.token_for(CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
        self.services
            .auth
            .authenticate(&token)
            .await
            .expect("customer session")
    }
}

pub async fn make_test_router() -> axum::Router {
    build_context().router()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn send(app: &axum::Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("router response")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
