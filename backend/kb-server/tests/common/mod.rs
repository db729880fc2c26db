#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_auth::{Claims, JwtValidator};
use kb_config::ValidationConfig;
use kb_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // In-memory databases live and die with their single connection
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
        .expect("Failed to create test database");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, auth disabled
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: None,
        desktop_user_id: Uuid::from_u128(1),
        validation: ValidationConfig::default(),
    }
}

/// Create AppState for testing, HS256 auth enabled
pub async fn create_auth_app_state() -> AppState {
    AppState {
        jwt_validator: Some(Arc::new(JwtValidator::with_hs256(TEST_SECRET))),
        ..create_test_app_state().await
    }
}

/// Create a registered user
pub async fn create_test_user(pool: &SqlitePool) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)")
        .bind(user_id.to_string())
        .bind(format!("{}@test.local", user_id))
        .bind("Test User")
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test user");
    user_id
}

pub fn token_for(user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + 3600,
        iat: now,
        email: None,
        roles: vec![],
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign token")
}

/// Router plus the acting user's credentials
pub struct TestClient {
    pub app: Router,
    pub user_id: Uuid,
    pub bearer: Option<String>,
}

impl TestClient {
    pub fn new(state: &AppState, user_id: Uuid) -> Self {
        Self {
            app: build_router(state.clone()),
            user_id,
            bearer: None,
        }
    }

    pub fn with_token(state: &AppState, user_id: Uuid) -> Self {
        Self {
            bearer: Some(token_for(user_id)),
            ..Self::new(state, user_id)
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        builder = match &self.bearer {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder.header("X-User-Id", self.user_id.to_string()),
        };
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    // Seeding helpers; each asserts the happy path

    pub async fn create_board(&self, name: &str) -> Value {
        let (status, json) = self.post("/api/v1/boards", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "create board: {json}");
        json["board"].clone()
    }

    pub async fn create_column(&self, board_id: &str, name: &str) -> Value {
        let (status, json) = self
            .post(
                &format!("/api/v1/boards/{}/columns", board_id),
                json!({ "name": name }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create column: {json}");
        json["column"].clone()
    }

    pub async fn create_task(&self, column_id: &str, title: &str) -> Value {
        let (status, json) = self
            .post(
                &format!("/api/v1/columns/{}/tasks", column_id),
                json!({ "title": title }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create task: {json}");
        json["task"].clone()
    }

    pub async fn move_task(&self, task_id: &str, body: Value) -> (StatusCode, Value) {
        self.patch(&format!("/api/v1/tasks/{}", task_id), body).await
    }

    pub async fn get_task(&self, task_id: &str) -> Value {
        let (status, json) = self.get(&format!("/api/v1/tasks/{}", task_id)).await;
        assert_eq!(status, StatusCode::OK, "get task: {json}");
        json["task"].clone()
    }

    /// Board tasks as `(title, column_id, order)` in server order
    pub async fn board_tasks(&self, board_id: &str) -> Vec<(String, String, i64)> {
        let (status, json) = self
            .get(&format!("/api/v1/boards/{}/tasks", board_id))
            .await;
        assert_eq!(status, StatusCode::OK, "list board tasks: {json}");
        json["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| {
                (
                    t["title"].as_str().unwrap().to_string(),
                    t["column_id"].as_str().unwrap().to_string(),
                    t["order"].as_i64().unwrap(),
                )
            })
            .collect()
    }
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap().to_string()
}

/// Id of the board's column at `index` in display order
pub fn column_id(board: &Value, index: usize) -> String {
    id_of(&board["columns"][index])
}
