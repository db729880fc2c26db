use crate::{DbError, Result as DbErrorResult, decode};

use kb_core::{Column, ColumnSummary};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ColumnRow {
    id: String,
    board_id: String,
    name: String,
    sort_order: i32,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ColumnRow> for Column {
    type Error = DbError;

    fn try_from(row: ColumnRow) -> DbErrorResult<Self> {
        Ok(Column {
            id: decode::uuid(&row.id, "kb_columns.id")?,
            board_id: decode::uuid(&row.board_id, "kb_columns.board_id")?,
            name: row.name,
            order: row.sort_order,
            created_at: decode::timestamp(row.created_at, "kb_columns.created_at")?,
            updated_at: decode::timestamp(row.updated_at, "kb_columns.updated_at")?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ColumnSummaryRow {
    #[sqlx(flatten)]
    column: ColumnRow,
    task_count: i64,
}

impl TryFrom<ColumnSummaryRow> for ColumnSummary {
    type Error = DbError;

    fn try_from(row: ColumnSummaryRow) -> DbErrorResult<Self> {
        Ok(ColumnSummary {
            column: Column::try_from(row.column)?,
            task_count: row.task_count,
        })
    }
}

const SUMMARY_SELECT: &str = r#"
    SELECT c.id, c.board_id, c.name, c.sort_order, c.created_at, c.updated_at,
           (SELECT COUNT(*) FROM kb_tasks t WHERE t.column_id = c.id) AS task_count
    FROM kb_columns c
"#;

pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_columns (id, board_id, name, sort_order, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.name)
        .bind(column.order)
        .bind(column.created_at.timestamp())
        .bind(column.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// The column, if its board belongs to `owner_id`.
    pub async fn find_for_owner<'e, E>(
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ColumnRow>(
            r#"
                SELECT c.id, c.board_id, c.name, c.sort_order, c.created_at, c.updated_at
                FROM kb_columns c
                JOIN kb_boards b ON b.id = c.board_id
                WHERE c.id = ? AND b.owner_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Column::try_from).transpose()
    }

    pub async fn find_summary_by_id<'e, E>(
        executor: E,
        id: Uuid,
    ) -> DbErrorResult<Option<ColumnSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SUMMARY_SELECT} WHERE c.id = ?");
        let row = sqlx::query_as::<_, ColumnSummaryRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(ColumnSummary::try_from).transpose()
    }

    /// Columns of a board in display order: `order`, then creation, then insertion.
    pub async fn find_by_board<'e, E>(
        executor: E,
        board_id: Uuid,
    ) -> DbErrorResult<Vec<ColumnSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{SUMMARY_SELECT} WHERE c.board_id = ? ORDER BY c.sort_order ASC, c.created_at ASC, c.rowid ASC"
        );
        let rows = sqlx::query_as::<_, ColumnSummaryRow>(&sql)
            .bind(board_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(ColumnSummary::try_from).collect()
    }

    /// Highest column order on the board, `None` when the board has no columns.
    pub async fn find_max_order<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Option<i32>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(sort_order) FROM kb_columns WHERE board_id = ?")
                .bind(board_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(max)
    }

    /// Overwrites name and order. Other columns are untouched.
    pub async fn update<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE kb_columns
                SET name = ?, sort_order = ?, updated_at = ?
                WHERE id = ?
                "#,
        )
        .bind(&column.name)
        .bind(column.order)
        .bind(column.updated_at.timestamp())
        .bind(column.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Deletes the column along with its tasks and their comments.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM kb_columns WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
