// src/main.rs
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use storefront_core::application::{
    commands::auth::BootstrapAdminCommand,
    ports::{ClockPort, SessionStorePort},
    services::{Adapters, ApplicationServices, Repositories, ServiceSettings},
};
use storefront_core::config::AppConfig;
use storefront_core::infrastructure::{
    database,
    repositories::{
        PostgresAccountRepository, PostgresCategoryReadRepository,
        PostgresCategoryWriteRepository, PostgresProductReadRepository,
        PostgresProductWriteRepository,
    },
    security::{Argon2PasswordHasher, HmacSessionSigner, InMemorySessionStore, RedisSessionStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use storefront_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{HttpState, SessionCookieSettings},
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to PostgreSQL")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let repos = Repositories {
        accounts: Arc::new(PostgresAccountRepository::new(pool.clone())),
        category_write: Arc::new(PostgresCategoryWriteRepository::new(pool.clone())),
        category_read: Arc::new(PostgresCategoryReadRepository::new(pool.clone())),
        product_write: Arc::new(PostgresProductWriteRepository::new(pool.clone())),
        product_read: Arc::new(PostgresProductReadRepository::new(pool)),
    };

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let sessions: Arc<SessionStorePort> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using Redis session store");
            Arc::new(RedisSessionStore::from_url(url)?)
        }
        None => {
            tracing::info!("using in-memory session store");
            Arc::new(InMemorySessionStore::new(Arc::clone(&clock)))
        }
    };
    let signer = HmacSessionSigner::new(config.session_secret())
        .map_err(|err| anyhow::anyhow!("invalid session secret: {err}"))?;

    let adapters = Adapters {
        password_hasher: Arc::new(Argon2PasswordHasher),
        sessions,
        signer: Arc::new(signer),
        clock,
        slugger: Arc::new(DefaultSlugGenerator),
    };
    let settings = ServiceSettings {
        slug_policy: config.slug_policy(),
        session_ttl: config.session_ttl(),
    };
    let services = Arc::new(ApplicationServices::new(repos, adapters, settings));

    if let Some(admin) = config.bootstrap_admin() {
        let created = services
            .auth
            .bootstrap_admin(BootstrapAdminCommand {
                email: admin.email.clone(),
                password: admin.password.clone(),
                display_name: Some("Administrator".into()),
            })
            .await?;
        if !created {
            tracing::debug!(email = %admin.email, "bootstrap admin already exists");
        }
    }

    let state = HttpState {
        services,
        session_cookie: SessionCookieSettings {
            secure: config.session_cookie_secure(),
            max_age: config.session_ttl(),
        },
    };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        request_timeout: config.request_timeout(),
        login_rate_limit: config.login_rate_limit(),
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
