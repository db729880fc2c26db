use crate::{ColumnRef, Task, UserSummary};

use serde::{Deserialize, Serialize};

/// A task with the relations the API embeds alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDetail {
    pub task: Task,
    pub creator: UserSummary,
    pub column: ColumnRef,
    pub comment_count: i64,
}
