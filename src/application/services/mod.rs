// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            auth::AuthCommandService, categories::CategoryCommandService,
            products::ProductCommandService,
        },
        ports::{
            ClockPort, PasswordHasherPort, SessionStorePort, SessionTokenSignerPort,
            SlugGeneratorPort,
        },
        queries::catalog::CatalogQueryService,
    },
    domain::{
        account::{AccountRepository, AdminSession},
        category::{CategoryReadRepository, CategoryWriteRepository},
        product::{ProductReadRepository, ProductWriteRepository},
        slug::{SlugPolicy, UniqueSlugResolver},
    },
};

/// Repositories the application services are built from.
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub category_write: Arc<dyn CategoryWriteRepository>,
    pub category_read: Arc<dyn CategoryReadRepository>,
    pub product_write: Arc<dyn ProductWriteRepository>,
    pub product_read: Arc<dyn ProductReadRepository>,
}

/// Infrastructure adapters behind the application ports.
pub struct Adapters {
    pub password_hasher: Arc<PasswordHasherPort>,
    pub sessions: Arc<SessionStorePort>,
    pub signer: Arc<SessionTokenSignerPort>,
    pub clock: Arc<ClockPort>,
    pub slugger: Arc<SlugGeneratorPort>,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub slug_policy: SlugPolicy,
    pub session_ttl: Duration,
}

pub struct ApplicationServices {
    pub auth: Arc<AuthCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters, settings: ServiceSettings) -> Self {
        let slugs = Arc::new(UniqueSlugResolver::new(
            Arc::clone(&adapters.slugger),
            settings.slug_policy,
        ));

        let auth = Arc::new(AuthCommandService::new(
            Arc::clone(&repos.accounts),
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.sessions),
            Arc::clone(&adapters.signer),
            Arc::clone(&adapters.clock),
            settings.session_ttl,
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category_write),
            Arc::clone(&repos.category_read),
            Arc::clone(&slugs),
            Arc::clone(&adapters.clock),
        ));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&repos.product_write),
            Arc::clone(&repos.product_read),
            Arc::clone(&repos.category_read),
            Arc::clone(&slugs),
            Arc::clone(&adapters.clock),
        ));

        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&repos.category_read),
            Arc::clone(&repos.product_read),
        ));

        Self {
            auth,
            category_commands,
            product_commands,
            catalog_queries,
        }
    }

    /// Session check used by the admin route guard.
    pub async fn authorize_admin(&self, token: &str) -> ApplicationResult<AdminSession> {
        self.auth.authorize_admin(token).await
    }
}
