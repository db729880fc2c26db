use crate::CommentDto;

use serde::Serialize;

/// A task's comments, oldest first
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}
