use crate::BoardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: BoardDto,
}
