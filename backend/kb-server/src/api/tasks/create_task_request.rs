use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    /// `high`, `medium` or `low`; defaults to `medium`
    pub priority: Option<String>,
}
