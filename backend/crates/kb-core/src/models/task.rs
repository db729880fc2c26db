use crate::Priority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub column_id: Uuid,
    pub creator_id: Uuid,

    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    /// Position within the column. Moves overwrite it literally, so ties are legal.
    pub order: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        column_id: Uuid,
        creator_id: Uuid,
        title: String,
        description: Option<String>,
        priority: Priority,
        order: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            column_id,
            creator_id,
            title,
            description,
            priority,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Title and description folded with [`fold_search`], as matched by task search.
    pub fn search_text(&self) -> String {
        match &self.description {
            Some(description) => fold_search(&format!("{}\n{}", self.title, description)),
            None => fold_search(&self.title),
        }
    }
}

/// Case folding shared by stored search text and search terms.
///
/// Unicode lowercase, so `Écrire` and `écrire` match.
pub fn fold_search(text: &str) -> String {
    text.to_lowercase()
}
