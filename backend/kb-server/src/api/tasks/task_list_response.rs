use crate::TaskDto;

use serde::Serialize;

/// Every task on a board, in ascending order
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
}
