use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory databases live and die with their single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, 0)")
        .bind(user_id.to_string())
        .bind(format!("test-{user_id}@example.com"))
        .bind("Test User")
        .execute(pool)
        .await
        .expect("Failed to create test user");
}
