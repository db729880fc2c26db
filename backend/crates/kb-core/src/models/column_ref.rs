use crate::Column;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a column embedded in task responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnRef {
    pub id: Uuid,
    pub name: String,
    pub board_id: Uuid,
}

impl From<&Column> for ColumnRef {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id,
            name: column.name.clone(),
            board_id: column.board_id,
        }
    }
}
