use crate::TaskDto;

use kb_core::Pagination;

use serde::Serialize;

/// One page of a column's tasks
#[derive(Debug, Serialize)]
pub struct TaskPageResponse {
    pub tasks: Vec<TaskDto>,
    pub pagination: Pagination,
}
