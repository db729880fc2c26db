use kb_core::ColumnRef;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnRefDto {
    pub id: String,
    pub name: String,
    pub board_id: String,
}

impl From<ColumnRef> for ColumnRefDto {
    fn from(c: ColumnRef) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            board_id: c.board_id.to_string(),
        }
    }
}
