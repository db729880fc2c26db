use serde::Deserialize;
use uuid::Uuid;

/// A column as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnCard {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub order: i32,
    #[serde(default)]
    pub created_at: i64,
}
