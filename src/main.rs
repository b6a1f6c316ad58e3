//! LinkVault server: password authentication with rotating refresh
//! tokens, fronting a per-user bookmark store.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use linkvault_api::state::AppState;
use linkvault_auth::jwt::decoder::JwtDecoder;
use linkvault_auth::jwt::encoder::JwtEncoder;
use linkvault_auth::password::PasswordHasher;
use linkvault_auth::service::AuthService;
use linkvault_core::config::AppConfig;
use linkvault_core::error::AppError;
use linkvault_database::DatabasePool;
use linkvault_database::repositories::{BookmarkRepository, UserRepository};
use linkvault_database::store::{BookmarkStore, UserStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("LINKVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LinkVault v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = DatabasePool::connect(&config.database).await?;

    linkvault_database::migration::run_migrations(db_pool.pool()).await?;

    let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.pool().clone()));
    let bookmark_store: Arc<dyn BookmarkStore> =
        Arc::new(BookmarkRepository::new(db_pool.pool().clone()));

    let jwt_encoder = JwtEncoder::new(&config.auth);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_store),
        PasswordHasher::new(),
        jwt_encoder,
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        user_store,
        bookmark_store,
        jwt_decoder,
        auth_service,
    };

    let router = linkvault_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
    }
    tracing::info!("Shutdown signal received");
}
