use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::domain::sso::ports::SsoServicePort;
use sso_service::domain::sso::service::SsoService;
use sso_service::domain::user::ports::UserServicePort;
use sso_service::domain::user::service::UserService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::InMemoryRepository;
use sso_service::outbound::repositories::PostgresAppRepository;
use sso_service::outbound::repositories::PostgresClientRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        persistent = config.database.url.is_some(),
        hashing = ?config.hashing.algorithm,
        "Configuration loaded"
    );

    let hashing = auth::password::from_config(&config.hashing)?;
    let jwt_secret = config.jwt.secret.as_bytes();

    let (user_service, sso_service) = match config.database.url.as_deref() {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let users = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            let clients = Arc::new(PostgresClientRepository::new(pg_pool.clone()));
            let apps = Arc::new(PostgresAppRepository::new(pg_pool));

            let user_service: Arc<dyn UserServicePort> =
                Arc::new(UserService::new(users, Arc::clone(&hashing), jwt_secret));
            let sso_service: Arc<dyn SsoServicePort> =
                Arc::new(SsoService::new(clients, apps, hashing));
            (user_service, sso_service)
        }
        None => {
            tracing::warn!("No database configured, state is kept in memory only");
            let repository = Arc::new(InMemoryRepository::new());

            let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                Arc::clone(&repository),
                Arc::clone(&hashing),
                jwt_secret,
            ));
            let sso_service: Arc<dyn SsoServicePort> =
                Arc::new(SsoService::new(Arc::clone(&repository), repository, hashing));
            (user_service, sso_service)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, sso_service);
    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
