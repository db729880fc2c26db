use crate::Board;

use serde::{Deserialize, Serialize};

/// A board as it appears in the owner's board list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardSummary {
    pub board: Board,
    pub column_count: i64,
}
