use crate::{DbError, Result as DbErrorResult, decode};

use kb_core::{Board, BoardSummary};

use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct BoardRow {
    id: String,
    owner_id: String,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<BoardRow> for Board {
    type Error = DbError;

    fn try_from(row: BoardRow) -> DbErrorResult<Self> {
        Ok(Board {
            id: decode::uuid(&row.id, "kb_boards.id")?,
            owner_id: decode::uuid(&row.owner_id, "kb_boards.owner_id")?,
            name: row.name,
            created_at: decode::timestamp(row.created_at, "kb_boards.created_at")?,
            updated_at: decode::timestamp(row.updated_at, "kb_boards.updated_at")?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BoardSummaryRow {
    #[sqlx(flatten)]
    board: BoardRow,
    column_count: i64,
}

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_boards (id, owner_id, name, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(board.id.to_string())
        .bind(board.owner_id.to_string())
        .bind(&board.name)
        .bind(board.created_at.timestamp())
        .bind(board.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// The board, if it exists and belongs to `owner_id`.
    pub async fn find_for_owner<'e, E>(
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
                SELECT id, owner_id, name, created_at, updated_at
                FROM kb_boards
                WHERE id = ? AND owner_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Board::try_from).transpose()
    }

    /// All boards of an owner, newest first, with their column counts.
    pub async fn find_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Vec<BoardSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, BoardSummaryRow>(
            r#"
                SELECT b.id, b.owner_id, b.name, b.created_at, b.updated_at,
                       (SELECT COUNT(*) FROM kb_columns c WHERE c.board_id = b.id) AS column_count
                FROM kb_boards b
                WHERE b.owner_id = ?
                ORDER BY b.created_at DESC, b.rowid DESC
                "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(BoardSummary {
                    board: Board::try_from(row.board)?,
                    column_count: row.column_count,
                })
            })
            .collect()
    }

    /// Deletes the board along with its columns, tasks and comments.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM kb_boards WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
