use serde::Deserialize;

/// Query parameters for listing a column's tasks
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
    /// `created` (newest first, default) or `priority`
    pub sort: Option<String>,
    /// One-based
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
