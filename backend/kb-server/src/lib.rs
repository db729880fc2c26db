pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{me, register},
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        user_summary_dto::UserSummaryDto,
    },
    boards::{
        board_dto::BoardDto,
        board_list_response::BoardListResponse,
        board_response::BoardResponse,
        boards::{create_board, delete_board, get_board, list_boards},
        create_board_request::CreateBoardRequest,
    },
    columns::{
        column_dto::ColumnDto,
        column_list_response::ColumnListResponse,
        column_ref_dto::ColumnRefDto,
        column_response::ColumnResponse,
        columns::{create_column, delete_column, list_columns, update_column},
        create_column_request::CreateColumnRequest,
        update_column_request::UpdateColumnRequest,
    },
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{create_comment, delete_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{ApiJson, ApiQuery, UserId},
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_page_response::TaskPageResponse,
        task_response::TaskResponse,
        tasks::{
            create_task, delete_task, get_task, list_board_tasks, list_column_tasks, update_task,
        },
        update_task_request::UpdateTaskRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;

#[cfg(test)]
mod tests;
