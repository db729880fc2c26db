//! Task REST API handlers
//!
//! Moving a task is a PATCH carrying `column_id` and/or `order`. The values are
//! written as given; no other task is renumbered.

use crate::{
    ApiError, ApiJson, ApiQuery, ApiResult, CreateTaskRequest, ListTasksQuery, TaskDto,
    TaskListResponse, TaskPageResponse, TaskResponse, UpdateTaskRequest, UserId,
    api::validation::{optional_text, parse_id, parse_priority, required_text},
    app_state::AppState,
};

use kb_core::{MovePlan, Pagination, Placement, Task, TaskQuery, TaskSort, next_order};
use kb_db::{BoardRepository, ColumnRepository, TaskRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// GET /api/v1/boards/{board_id}/tasks
///
/// All tasks on the board, ascending by order. Clients group them by column.
pub async fn list_board_tasks(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<TaskListResponse>> {
    let board_uuid = parse_id(&board_id, "board_id")?;

    BoardRepository::find_for_owner(&state.pool, board_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    let tasks = TaskRepository::find_by_board(&state.pool, board_uuid).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/v1/columns/{column_id}/tasks
///
/// Search, sort and paginate a column's tasks
pub async fn list_column_tasks(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(column_id): Path<String>,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> ApiResult<Json<TaskPageResponse>> {
    let column_uuid = parse_id(&column_id, "column_id")?;

    // 1. Validate query
    let sort = query
        .sort
        .as_deref()
        .map(str::parse::<TaskSort>)
        .transpose()?
        .unwrap_or_default();

    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::validation("page", "page must be at least 1"));
    }

    let max_page_size = state.validation.max_page_size;
    let limit = query.limit.unwrap_or(state.validation.default_page_size);
    if limit == 0 || limit > max_page_size {
        return Err(ApiError::validation(
            "limit",
            format!("limit must be between 1 and {max_page_size}"),
        ));
    }

    // 2. Column must belong to the caller
    ColumnRepository::find_for_owner(&state.pool, column_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", column_id)))?;

    // 3. Fetch page and total
    let task_query = TaskQuery::new(query.search, sort, page, limit);
    let tasks = TaskRepository::find_by_column(&state.pool, column_uuid, &task_query).await?;
    let total =
        TaskRepository::count_by_column(&state.pool, column_uuid, task_query.search.as_deref())
            .await?;

    Ok(Json(TaskPageResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
        pagination: Pagination::new(task_query.page, task_query.limit, total),
    }))
}

/// POST /api/v1/columns/{column_id}/tasks
///
/// Append a task after the column's current last task
pub async fn create_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(column_id): Path<String>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let limits = &state.validation;

    // 1. Validate input
    let column_uuid = parse_id(&column_id, "column_id")?;
    let title = required_text(&req.title, "title", limits.max_title_length)?;
    let description = match req.description.as_deref() {
        Some(d) => optional_text(d, "description", limits.max_description_length)?,
        None => None,
    };
    let priority = parse_priority(req.priority.as_deref())?.unwrap_or_default();

    // 2. Column must belong to the caller, who must be registered
    ColumnRepository::find_for_owner(&state.pool, column_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", column_id)))?;
    if UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    // 3. Append. Concurrent creates in one column may read the same maximum
    //    and persist the same order.
    let max_order = TaskRepository::find_max_order(&state.pool, column_uuid).await?;
    let task = Task::new(
        column_uuid,
        user_id,
        title,
        description,
        priority,
        next_order(max_order)?,
    );
    TaskRepository::create(&state.pool, &task).await?;

    log::info!(
        "Created task {} at order {} in column {} via REST API",
        task.id,
        task.order,
        column_id
    );

    let dto = task_dto(&state.pool, task.id).await?;

    Ok((StatusCode::CREATED, Json(TaskResponse { task: dto })))
}

/// GET /api/v1/tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(task_id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_uuid = parse_id(&task_id, "task_id")?;

    TaskRepository::find_for_owner(&state.pool, task_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    let dto = task_dto(&state.pool, task_uuid).await?;

    Ok(Json(TaskResponse { task: dto }))
}

/// PATCH /api/v1/tasks/{task_id}
///
/// Edit fields and/or move the task
pub async fn update_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(task_id): Path<String>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let limits = &state.validation;
    let task_uuid = parse_id(&task_id, "task_id")?;

    // 1. Fetch existing task
    let mut task = TaskRepository::find_for_owner(&state.pool, task_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    // 2. Validate field edits
    if let Some(ref title) = req.title {
        task.title = required_text(title, "title", limits.max_title_length)?;
    }
    if let Some(ref description) = req.description {
        task.description =
            optional_text(description, "description", limits.max_description_length)?;
    }
    if let Some(priority) = parse_priority(req.priority.as_deref())? {
        task.priority = priority;
    }

    // 3. Resolve the move
    let target_column = req
        .column_id
        .as_deref()
        .map(|id| parse_id(id, "column_id"))
        .transpose()?;
    let current = Placement::new(task.column_id, task.order);
    let plan = MovePlan::resolve(current, target_column, req.order)?;

    // 4. A destination column must belong to the caller
    if let Some(destination) = plan.new_parent(&current) {
        ColumnRepository::find_for_owner(&state.pool, destination, user_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Column {} not found", destination)))?;
    }

    let destination_max = match plan {
        MovePlan::Append { parent_id } => {
            TaskRepository::find_max_order(&state.pool, parent_id).await?
        }
        MovePlan::Stay | MovePlan::Place(_) => None,
    };
    let placement = plan.apply(current, destination_max)?;

    if placement != current {
        log::info!(
            "Moving task {} from column {} order {} to column {} order {}",
            task.id,
            current.parent_id,
            current.order,
            placement.parent_id,
            placement.order
        );
    }

    // 5. Persist. Sibling orders are left untouched.
    task.column_id = placement.parent_id;
    task.order = placement.order;
    task.updated_at = Utc::now();
    TaskRepository::update(&state.pool, &task).await?;

    let dto = task_dto(&state.pool, task.id).await?;

    Ok(Json(TaskResponse { task: dto }))
}

/// DELETE /api/v1/tasks/{task_id}
///
/// Removes the task's comments with it
pub async fn delete_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode> {
    let task_uuid = parse_id(&task_id, "task_id")?;

    TaskRepository::find_for_owner(&state.pool, task_uuid, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    if !TaskRepository::delete(&state.pool, task_uuid).await? {
        return Err(ApiError::not_found(format!("Task {} not found", task_id)));
    }

    log::info!("Deleted task {} via REST API", task_id);

    Ok(StatusCode::NO_CONTENT)
}

async fn task_dto(pool: &SqlitePool, task_id: Uuid) -> ApiResult<TaskDto> {
    let detail = TaskRepository::find_detail(pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    Ok(TaskDto::from(detail))
}
