use crate::{
    admin, create_board, create_column, create_comment, create_task, delete_board, delete_column,
    delete_comment, delete_task, get_board, get_task, health, list_board_tasks, list_boards,
    list_column_tasks, list_columns, list_comments, me, register, update_column, update_task,
    app_state::AppState,
};

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        // Boards
        .route("/boards", get(list_boards).post(create_board))
        .route("/boards/{board_id}", get(get_board).delete(delete_board))
        .route(
            "/boards/{board_id}/columns",
            get(list_columns).post(create_column),
        )
        .route("/boards/{board_id}/tasks", get(list_board_tasks))
        // Columns
        .route(
            "/columns/{column_id}",
            patch(update_column).delete(delete_column),
        )
        .route(
            "/columns/{column_id}/tasks",
            get(list_column_tasks).post(create_task),
        )
        // Tasks
        .route(
            "/tasks/{task_id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route(
            "/tasks/{task_id}/comments",
            get(list_comments).post(create_comment),
        )
        // Comments
        .route("/comments/{comment_id}", delete(delete_comment))
}
