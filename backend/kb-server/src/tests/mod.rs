mod api;

use crate::AppState;

use kb_auth::JwtValidator;
use kb_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test pool");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// State with auth disabled
pub(crate) async fn create_test_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: None,
        desktop_user_id: Uuid::from_u128(1),
        validation: ValidationConfig::default(),
    }
}

/// State with HS256 auth enabled
pub(crate) async fn create_auth_state() -> AppState {
    AppState {
        jwt_validator: Some(Arc::new(JwtValidator::with_hs256(TEST_SECRET))),
        ..create_test_state().await
    }
}
