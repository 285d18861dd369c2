//! FleetGate Server — authorization and tenant-scoping service for the
//! fleet dashboard.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use fleetgate_api::state::AppState;
use fleetgate_auth::password::PasswordHasher;
use fleetgate_auth::rbac::{AccessChecker, PermissionResolver};
use fleetgate_auth::store::SqlAuthStore;
use fleetgate_auth::tenant::TenantScopeResolver;
use fleetgate_auth::token::TokenService;
use fleetgate_core::config::AppConfig;
use fleetgate_core::error::AppError;
use fleetgate_database::DatabasePool;
use fleetgate_database::repositories::{CompanyRepository, RoleRepository, UserRepository};

#[tokio::main]
async fn main() {
    let env = std::env::var("FLEETGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
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
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FleetGate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    fleetgate_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Repositories ─────────────────────────────────────
    let users = Arc::new(UserRepository::new(db.pool().clone()));
    let roles = Arc::new(RoleRepository::new(db.pool().clone()));
    let companies = Arc::new(CompanyRepository::new(db.pool().clone()));

    // ── Step 3: Auth system ──────────────────────────────────────
    tracing::info!("Initializing authorization system...");
    let store = Arc::new(SqlAuthStore::new(
        Arc::clone(&users),
        Arc::clone(&roles),
        Arc::clone(&companies),
    ));
    let password_hasher = Arc::new(PasswordHasher::new(&config.auth));
    let tokens = Arc::new(TokenService::new(&config.auth));
    let permissions = PermissionResolver::new(store.clone());
    let access = Arc::new(AccessChecker::new(permissions.clone()));
    let tenant = Arc::new(TenantScopeResolver::new(store));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        password_hasher,
        tokens,
        permissions: Arc::new(permissions),
        access,
        tenant,
        users,
    };

    let app = fleetgate_api::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FleetGate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("FleetGate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
