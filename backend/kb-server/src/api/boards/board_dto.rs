use crate::ColumnDto;

use kb_core::{Board, BoardSummary, ColumnSummary};

use serde::Serialize;

/// A board. Listings carry `column_count`; single-board responses carry `columns`.
#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDto>>,
}

impl BoardDto {
    pub fn with_columns(board: Board, columns: Vec<ColumnSummary>) -> Self {
        let column_count = i64::try_from(columns.len()).unwrap_or(i64::MAX);
        Self {
            columns: Some(columns.into_iter().map(ColumnDto::from).collect()),
            column_count: Some(column_count),
            ..Self::from(board)
        }
    }
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            owner_id: b.owner_id.to_string(),
            name: b.name,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
            column_count: None,
            columns: None,
        }
    }
}

impl From<BoardSummary> for BoardDto {
    fn from(s: BoardSummary) -> Self {
        Self {
            column_count: Some(s.column_count),
            ..Self::from(s.board)
        }
    }
}
