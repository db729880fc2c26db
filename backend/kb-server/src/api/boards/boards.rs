//! Board REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, BoardDto, BoardListResponse, BoardResponse, CreateBoardRequest,
    UserId,
    api::validation::{parse_id, required_text},
    app_state::AppState,
};

use kb_core::Board;
use kb_db::{BoardRepository, ColumnRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/v1/boards
pub async fn list_boards(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<BoardListResponse>> {
    let boards = BoardRepository::find_by_owner(&state.pool, user_id).await?;

    Ok(Json(BoardListResponse {
        boards: boards.into_iter().map(BoardDto::from).collect(),
    }))
}

/// POST /api/v1/boards
///
/// Create a board together with its starter columns
pub async fn create_board(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    ApiJson(req): ApiJson<CreateBoardRequest>,
) -> ApiResult<(StatusCode, Json<BoardResponse>)> {
    // 1. Validate input
    let name = required_text(&req.name, "name", state.validation.max_name_length)?;

    // 2. Owner must be registered
    if UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    // 3. Board and starter columns land together or not at all
    let board = Board::new(user_id, name);
    let mut tx = state.pool.begin().await?;
    BoardRepository::create(&mut *tx, &board).await?;
    for column in board.default_columns() {
        ColumnRepository::create(&mut *tx, &column).await?;
    }
    tx.commit().await?;

    let columns = ColumnRepository::find_by_board(&state.pool, board.id).await?;

    log::info!("Created board {} for user {} via REST API", board.id, user_id);

    Ok((
        StatusCode::CREATED,
        Json(BoardResponse {
            board: BoardDto::with_columns(board, columns),
        }),
    ))
}

/// GET /api/v1/boards/{board_id}
pub async fn get_board(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<BoardResponse>> {
    let board_uuid = parse_id(&board_id, "board_id")?;

    let board = BoardRepository::find_for_owner(&state.pool, board_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;
    let columns = ColumnRepository::find_by_board(&state.pool, board.id).await?;

    Ok(Json(BoardResponse {
        board: BoardDto::with_columns(board, columns),
    }))
}

/// DELETE /api/v1/boards/{board_id}
///
/// Removes the board's columns, tasks and comments with it
pub async fn delete_board(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(board_id): Path<String>,
) -> ApiResult<StatusCode> {
    let board_uuid = parse_id(&board_id, "board_id")?;

    BoardRepository::find_for_owner(&state.pool, board_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    if !BoardRepository::delete(&state.pool, board_uuid).await? {
        return Err(ApiError::not_found(format!("Board {} not found", board_id)));
    }

    log::info!("Deleted board {} via REST API", board_id);

    Ok(StatusCode::NO_CONTENT)
}
