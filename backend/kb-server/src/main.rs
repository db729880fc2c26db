use kb_server::{AppState, ServerResult, build_router, logger};

use kb_auth::JwtValidator;
use kb_config::Config;
use kb_db::UserRepository;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

const DESKTOP_USER_EMAIL: &str = "desktop@localhost";
const DESKTOP_USER_NAME: &str = "Desktop User";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; KB_* variables may also come from the environment
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    kb_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    let jwt_validator = build_jwt_validator(&config)?;
    let desktop_user_id = config.auth.desktop_user_id();
    if jwt_validator.is_none() {
        ensure_desktop_user(&pool, &config).await?;
    }

    let app_state = AppState {
        pool: pool.clone(),
        jwt_validator,
        desktop_user_id,
        validation: config.validation.clone(),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush WAL so the database file is self-contained after exit
    if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&pool)
        .await
    {
        warn!("Final checkpoint failed: {}", e);
    }
    pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// JWT validator when auth is enabled. HS256 secret wins over an RS256 key.
fn build_jwt_validator(config: &Config) -> ServerResult<Option<Arc<JwtValidator>>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - running in desktop/development mode");
        return Ok(None);
    }

    if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        return Ok(Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes()))));
    }

    let public_key = config
        .auth
        .read_public_key(&Config::config_dir()?)?
        .ok_or_else(|| {
            kb_config::ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )
        })?;
    info!("JWT: RS256 authentication enabled");

    Ok(Some(Arc::new(JwtValidator::with_rs256(&public_key)?)))
}

/// Desktop mode acts as a fixed user, which must exist before it can own boards.
async fn ensure_desktop_user(pool: &SqlitePool, config: &Config) -> ServerResult<()> {
    let user_id = config.auth.desktop_user_id();
    UserRepository::ensure_exists(pool, user_id, DESKTOP_USER_EMAIL, DESKTOP_USER_NAME).await?;
    info!("Desktop user {} ready", user_id);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
