use serde::Deserialize;

/// Rename and/or reposition a column. `order` is written as given.
#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    pub name: Option<String>,
    pub order: Option<i32>,
}
