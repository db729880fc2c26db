use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
}
