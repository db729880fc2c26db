use serde::Deserialize;

/// New columns are appended after the board's current last column
#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub name: String,
}
