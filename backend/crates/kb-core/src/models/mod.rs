pub mod board;
pub mod board_summary;
pub mod column;
pub mod column_ref;
pub mod column_summary;
pub mod comment;
pub mod comment_detail;
pub mod pagination;
pub mod priority;
pub mod task;
pub mod task_detail;
pub mod task_query;
pub mod task_sort;
pub mod user;
pub mod user_summary;
