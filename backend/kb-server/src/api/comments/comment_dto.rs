use crate::UserSummaryDto;

use kb_core::CommentDetail;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub task_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub author: UserSummaryDto,
}

impl From<CommentDetail> for CommentDto {
    fn from(d: CommentDetail) -> Self {
        let c = d.comment;
        Self {
            id: c.id.to_string(),
            task_id: c.task_id.to_string(),
            author_id: c.author_id.to_string(),
            content: c.content,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
            author: UserSummaryDto::from(d.author),
        }
    }
}
