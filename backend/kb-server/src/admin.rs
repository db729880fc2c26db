//! Administrative endpoints for server management.

use crate::{ApiResult, app_state::AppState};

use axum::{Json, extract::State};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

/// POST /admin/checkpoint
///
/// Flush the write-ahead log into the main database file.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<CheckpointResponse>> {
    info!("Manual checkpoint requested");

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&state.pool)
        .await?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}
