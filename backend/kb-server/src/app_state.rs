use kb_auth::JwtValidator;
use kb_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when auth is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Acting user when auth is disabled and no X-User-Id header is sent
    pub desktop_user_id: Uuid,
    pub validation: ValidationConfig,
}
