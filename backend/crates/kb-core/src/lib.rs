pub mod error;
pub mod models;
pub mod ordering;

pub use error::{CoreError, Result as CoreResult};
pub use models::board::{Board, DEFAULT_COLUMN_NAMES};
pub use models::board_summary::BoardSummary;
pub use models::column::Column;
pub use models::column_ref::ColumnRef;
pub use models::column_summary::ColumnSummary;
pub use models::comment::Comment;
pub use models::comment_detail::CommentDetail;
pub use models::pagination::Pagination;
pub use models::priority::Priority;
pub use models::task::{Task, fold_search};
pub use models::task_detail::TaskDetail;
pub use models::task_query::TaskQuery;
pub use models::task_sort::TaskSort;
pub use models::user::User;
pub use models::user_summary::UserSummary;
pub use ordering::{MovePlan, Placement, next_order};

#[cfg(test)]
mod tests;
