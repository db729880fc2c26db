//! Comment REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, CommentDto, CommentListResponse, CommentResponse,
    CreateCommentRequest, UserId,
    api::validation::{parse_id, required_text},
    app_state::AppState,
};

use kb_core::Comment;
use kb_db::{CommentRepository, TaskRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/v1/tasks/{task_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(task_id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let task_uuid = parse_id(&task_id, "task_id")?;

    TaskRepository::find_for_owner(&state.pool, task_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    let comments = CommentRepository::find_by_task(&state.pool, task_uuid).await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/v1/tasks/{task_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(task_id): Path<String>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    // 1. Validate content
    let task_uuid = parse_id(&task_id, "task_id")?;
    let content = required_text(
        &req.content,
        "content",
        state.validation.max_comment_length,
    )?;

    // 2. Task must be on one of the caller's boards
    TaskRepository::find_for_owner(&state.pool, task_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;
    if UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    // 3. Create comment
    let comment = Comment::new(task_uuid, user_id, content);
    CommentRepository::create(&state.pool, &comment).await?;

    log::info!(
        "Created comment {} on task {} via REST API",
        comment.id,
        task_id
    );

    let detail = CommentRepository::find_detail(&state.pool, comment.id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Comment {} not found", comment.id)))?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            comment: CommentDto::from(detail),
        }),
    ))
}

/// DELETE /api/v1/comments/{comment_id}
///
/// Only the author may delete a comment
pub async fn delete_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(comment_id): Path<String>,
) -> ApiResult<StatusCode> {
    let comment_uuid = parse_id(&comment_id, "comment_id")?;

    CommentRepository::find_for_author(&state.pool, comment_uuid, user_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Comment {} not found or not authorized",
                comment_id
            ))
        })?;

    if !CommentRepository::delete(&state.pool, comment_uuid).await? {
        return Err(ApiError::not_found(format!(
            "Comment {} not found",
            comment_id
        )));
    }

    log::info!("Deleted comment {} via REST API", comment_id);

    Ok(StatusCode::NO_CONTENT)
}
