mod decode;
pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
