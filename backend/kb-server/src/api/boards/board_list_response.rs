use crate::BoardDto;

use serde::Serialize;

/// The acting user's boards, newest first
#[derive(Debug, Serialize)]
pub struct BoardListResponse {
    pub boards: Vec<BoardDto>,
}
