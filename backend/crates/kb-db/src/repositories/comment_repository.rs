use crate::{DbError, Result as DbErrorResult, decode};

use kb_core::{Comment, CommentDetail, UserSummary};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    task_id: String,
    author_id: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DbError;

    fn try_from(row: CommentRow) -> DbErrorResult<Self> {
        Ok(Comment {
            id: decode::uuid(&row.id, "kb_comments.id")?,
            task_id: decode::uuid(&row.task_id, "kb_comments.task_id")?,
            author_id: decode::uuid(&row.author_id, "kb_comments.author_id")?,
            content: row.content,
            created_at: decode::timestamp(row.created_at, "kb_comments.created_at")?,
            updated_at: decode::timestamp(row.updated_at, "kb_comments.updated_at")?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CommentDetailRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_name: String,
    author_email: String,
}

impl TryFrom<CommentDetailRow> for CommentDetail {
    type Error = DbError;

    fn try_from(row: CommentDetailRow) -> DbErrorResult<Self> {
        let comment = Comment::try_from(row.comment)?;
        Ok(CommentDetail {
            author: UserSummary {
                id: comment.author_id,
                name: row.author_name,
                email: row.author_email,
            },
            comment,
        })
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT cm.id, cm.task_id, cm.author_id, cm.content, cm.created_at, cm.updated_at,
           u.name AS author_name, u.email AS author_email
    FROM kb_comments cm
    JOIN users u ON u.id = cm.author_id
"#;

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_comments (id, task_id, author_id, content, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.task_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .bind(comment.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_detail<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<CommentDetail>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{DETAIL_SELECT} WHERE cm.id = ?");
        let row = sqlx::query_as::<_, CommentDetailRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(CommentDetail::try_from).transpose()
    }

    /// Comments on a task, oldest first.
    pub async fn find_by_task<'e, E>(
        executor: E,
        task_id: Uuid,
    ) -> DbErrorResult<Vec<CommentDetail>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{DETAIL_SELECT} WHERE cm.task_id = ? ORDER BY cm.created_at ASC, cm.rowid ASC");
        let rows = sqlx::query_as::<_, CommentDetailRow>(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(CommentDetail::try_from).collect()
    }

    /// The comment, if `author_id` wrote it.
    pub async fn find_for_author<'e, E>(
        executor: E,
        id: Uuid,
        author_id: Uuid,
    ) -> DbErrorResult<Option<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
                SELECT id, task_id, author_id, content, created_at, updated_at
                FROM kb_comments
                WHERE id = ? AND author_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(author_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Comment::try_from).transpose()
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM kb_comments WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
