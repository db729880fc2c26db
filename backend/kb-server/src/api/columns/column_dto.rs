use kb_core::ColumnSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnDto {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub order: i32,
    pub task_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ColumnSummary> for ColumnDto {
    fn from(s: ColumnSummary) -> Self {
        let c = s.column;
        Self {
            id: c.id.to_string(),
            board_id: c.board_id.to_string(),
            name: c.name,
            order: c.order,
            task_count: s.task_count,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
