use serde::Deserialize;
use uuid::Uuid;

/// A task as held by the client. `column_id` and `order` may be optimistic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskCard {
    pub id: Uuid,
    pub column_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: String,
    pub order: i32,
    #[serde(default)]
    pub created_at: i64,
}

impl TaskCard {
    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
