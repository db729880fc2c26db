//! Column REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, ColumnDto, ColumnListResponse, ColumnResponse,
    CreateColumnRequest, UpdateColumnRequest, UserId,
    api::validation::{parse_id, required_text},
    app_state::AppState,
};

use kb_core::{Column, MovePlan, Placement, next_order};
use kb_db::{BoardRepository, ColumnRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// GET /api/v1/boards/{board_id}/columns
///
/// Columns in ascending order, ties by creation
pub async fn list_columns(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<ColumnListResponse>> {
    let board_uuid = parse_id(&board_id, "board_id")?;

    BoardRepository::find_for_owner(&state.pool, board_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    let columns = ColumnRepository::find_by_board(&state.pool, board_uuid).await?;

    Ok(Json(ColumnListResponse {
        columns: columns.into_iter().map(ColumnDto::from).collect(),
    }))
}

/// POST /api/v1/boards/{board_id}/columns
pub async fn create_column(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(board_id): Path<String>,
    ApiJson(req): ApiJson<CreateColumnRequest>,
) -> ApiResult<(StatusCode, Json<ColumnResponse>)> {
    // 1. Validate input
    let board_uuid = parse_id(&board_id, "board_id")?;
    let name = required_text(&req.name, "name", state.validation.max_name_length)?;

    // 2. Board must belong to the caller
    BoardRepository::find_for_owner(&state.pool, board_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    // 3. Append after the current last column. Read and insert are separate
    //    statements, so concurrent creates may share an order.
    let max_order = ColumnRepository::find_max_order(&state.pool, board_uuid).await?;
    let column = Column::new(board_uuid, name, next_order(max_order)?);
    ColumnRepository::create(&state.pool, &column).await?;

    log::info!(
        "Created column {} at order {} on board {} via REST API",
        column.id,
        column.order,
        board_id
    );

    let summary = column_summary(&state.pool, column.id).await?;

    Ok((StatusCode::CREATED, Json(ColumnResponse { column: summary })))
}

/// PATCH /api/v1/columns/{column_id}
///
/// Rename and/or reposition. The new order is stored as given; sibling
/// columns keep theirs.
pub async fn update_column(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(column_id): Path<String>,
    ApiJson(req): ApiJson<UpdateColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let column_uuid = parse_id(&column_id, "column_id")?;

    // 1. Fetch existing column
    let mut column = ColumnRepository::find_for_owner(&state.pool, column_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", column_id)))?;

    // 2. Validate and apply changes
    if let Some(ref name) = req.name {
        column.name = required_text(name, "name", state.validation.max_name_length)?;
    }

    let current = Placement::new(column.board_id, column.order);
    let placement = MovePlan::resolve(current, None, req.order)?.apply(current, None)?;
    if placement != current {
        log::info!(
            "Moving column {} from order {} to {}",
            column.id,
            current.order,
            placement.order
        );
    }
    column.order = placement.order;
    column.updated_at = Utc::now();

    // 3. Persist
    ColumnRepository::update(&state.pool, &column).await?;

    let summary = column_summary(&state.pool, column.id).await?;

    Ok(Json(ColumnResponse { column: summary }))
}

/// DELETE /api/v1/columns/{column_id}
///
/// Removes the column's tasks and their comments with it
pub async fn delete_column(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(column_id): Path<String>,
) -> ApiResult<StatusCode> {
    let column_uuid = parse_id(&column_id, "column_id")?;

    ColumnRepository::find_for_owner(&state.pool, column_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", column_id)))?;

    if !ColumnRepository::delete(&state.pool, column_uuid).await? {
        return Err(ApiError::not_found(format!(
            "Column {} not found",
            column_id
        )));
    }

    log::info!("Deleted column {} via REST API", column_id);

    Ok(StatusCode::NO_CONTENT)
}

async fn column_summary(pool: &SqlitePool, column_id: Uuid) -> ApiResult<ColumnDto> {
    let summary = ColumnRepository::find_summary_by_id(pool, column_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", column_id)))?;

    Ok(ColumnDto::from(summary))
}
