use crate::{ColumnRefDto, UserSummaryDto};

use kb_core::TaskDetail;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub column_id: String,
    pub creator_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: String,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
    pub creator: UserSummaryDto,
    pub column: ColumnRefDto,
    pub comment_count: i64,
}

impl From<TaskDetail> for TaskDto {
    fn from(d: TaskDetail) -> Self {
        let t = d.task;
        Self {
            id: t.id.to_string(),
            column_id: t.column_id.to_string(),
            creator_id: t.creator_id.to_string(),
            title: t.title,
            description: t.description,
            priority: t.priority.as_str().to_string(),
            order: t.order,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
            creator: UserSummaryDto::from(d.creator),
            column: ColumnRefDto::from(d.column),
            comment_count: d.comment_count,
        }
    }
}
