use crate::{DbError, Result as DbErrorResult, decode};

use kb_core::{ColumnRef, Task, TaskDetail, TaskQuery, TaskSort, UserSummary};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    column_id: String,
    creator_id: String,
    title: String,
    description: Option<String>,
    priority: String,
    sort_order: i32,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: decode::uuid(&row.id, "kb_tasks.id")?,
            column_id: decode::uuid(&row.column_id, "kb_tasks.column_id")?,
            creator_id: decode::uuid(&row.creator_id, "kb_tasks.creator_id")?,
            title: row.title,
            description: row.description,
            priority: decode::priority(&row.priority)?,
            order: row.sort_order,
            created_at: decode::timestamp(row.created_at, "kb_tasks.created_at")?,
            updated_at: decode::timestamp(row.updated_at, "kb_tasks.updated_at")?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TaskDetailRow {
    #[sqlx(flatten)]
    task: TaskRow,
    creator_name: String,
    creator_email: String,
    column_name: String,
    column_board_id: String,
    comment_count: i64,
}

impl TryFrom<TaskDetailRow> for TaskDetail {
    type Error = DbError;

    fn try_from(row: TaskDetailRow) -> DbErrorResult<Self> {
        let task = Task::try_from(row.task)?;
        Ok(TaskDetail {
            creator: UserSummary {
                id: task.creator_id,
                name: row.creator_name,
                email: row.creator_email,
            },
            column: ColumnRef {
                id: task.column_id,
                name: row.column_name,
                board_id: decode::uuid(&row.column_board_id, "kb_columns.board_id")?,
            },
            comment_count: row.comment_count,
            task,
        })
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT t.id, t.column_id, t.creator_id, t.title, t.description, t.priority,
           t.sort_order, t.created_at, t.updated_at,
           u.name AS creator_name, u.email AS creator_email,
           c.name AS column_name, c.board_id AS column_board_id,
           (SELECT COUNT(*) FROM kb_comments cm WHERE cm.task_id = t.id) AS comment_count
    FROM kb_tasks t
    JOIN users u ON u.id = t.creator_id
    JOIN kb_columns c ON c.id = t.column_id
"#;

/// Substring match of an already folded `?1` against `search_text`; NULL disables it.
const SEARCH_FILTER: &str = "(?1 IS NULL OR instr(t.search_text, ?1) > 0)";

fn sort_clause(sort: TaskSort) -> &'static str {
    match sort {
        TaskSort::Created => "t.created_at DESC, t.rowid DESC",
        TaskSort::Priority => {
            "CASE t.priority WHEN 'high' THEN 0 WHEN 'medium' THEN 1 ELSE 2 END, \
             t.sort_order ASC, t.created_at ASC, t.rowid ASC"
        }
    }
}

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_tasks (
                    id, column_id, creator_id, title, description, priority,
                    sort_order, search_text, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(task.id.to_string())
        .bind(task.column_id.to_string())
        .bind(task.creator_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.order)
        .bind(task.search_text())
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// The task, if the board it lives on belongs to `owner_id`.
    pub async fn find_for_owner<'e, E>(
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT t.id, t.column_id, t.creator_id, t.title, t.description, t.priority,
                       t.sort_order, t.created_at, t.updated_at
                FROM kb_tasks t
                JOIN kb_columns c ON c.id = t.column_id
                JOIN kb_boards b ON b.id = c.board_id
                WHERE t.id = ? AND b.owner_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Task::try_from).transpose()
    }

    pub async fn find_detail<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<TaskDetail>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{DETAIL_SELECT} WHERE t.id = ?");
        let row = sqlx::query_as::<_, TaskDetailRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(TaskDetail::try_from).transpose()
    }

    /// One page of a column's tasks, filtered and sorted per `query`.
    pub async fn find_by_column<'e, E>(
        executor: E,
        column_id: Uuid,
        query: &TaskQuery,
    ) -> DbErrorResult<Vec<TaskDetail>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{DETAIL_SELECT} WHERE {SEARCH_FILTER} AND t.column_id = ?2 ORDER BY {} LIMIT ?3 OFFSET ?4",
            sort_clause(query.sort)
        );
        let rows = sqlx::query_as::<_, TaskDetailRow>(&sql)
            .bind(query.search.as_deref())
            .bind(column_id.to_string())
            .bind(i64::from(query.limit))
            .bind(query.offset())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(TaskDetail::try_from).collect()
    }

    /// Number of a column's tasks matching `search`, ignoring paging.
    ///
    /// `search` must already be folded, as [`TaskQuery::search`] is.
    pub async fn count_by_column<'e, E>(
        executor: E,
        column_id: Uuid,
        search: Option<&str>,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT COUNT(*) FROM kb_tasks t WHERE {SEARCH_FILTER} AND t.column_id = ?2"
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(search)
            .bind(column_id.to_string())
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Every task on a board in ascending `order`, ties by creation then insertion.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<TaskDetail>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{DETAIL_SELECT} WHERE c.board_id = ? ORDER BY t.sort_order ASC, t.created_at ASC, t.rowid ASC"
        );
        let rows = sqlx::query_as::<_, TaskDetailRow>(&sql)
            .bind(board_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(TaskDetail::try_from).collect()
    }

    /// Highest task order in the column, `None` when the column is empty.
    pub async fn find_max_order<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Option<i32>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(sort_order) FROM kb_tasks WHERE column_id = ?")
                .bind(column_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(max)
    }

    /// Writes every mutable field of this one row, including its column and order.
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE kb_tasks
                SET column_id = ?, title = ?, description = ?, priority = ?,
                    sort_order = ?, search_text = ?, updated_at = ?
                WHERE id = ?
                "#,
        )
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.order)
        .bind(task.search_text())
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM kb_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
