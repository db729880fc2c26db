use serde::Deserialize;

/// Edit and/or move a task
///
/// `column_id` and `order` are written literally. Giving only a different
/// `column_id` appends the task to that column. An empty `description`
/// clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub column_id: Option<String>,
    pub order: Option<i32>,
}
