use crate::Column;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Columns every new board starts with, in display order.
pub const DEFAULT_COLUMN_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: Uuid,
    pub owner_id: Uuid,

    pub name: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(owner_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// The starter columns for this board, numbered from zero.
    pub fn default_columns(&self) -> Vec<Column> {
        DEFAULT_COLUMN_NAMES
            .iter()
            .zip(0..)
            .map(|(name, order)| Column::new(self.id, name.to_string(), order))
            .collect()
    }
}
