use crate::{Result as DbErrorResult, decode};

use kb_core::User;

use chrono::Utc;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = crate::DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: decode::uuid(&row.id, "users.id")?,
            email: row.email,
            name: row.name,
            created_at: decode::timestamp(row.created_at, "users.created_at")?,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.created_at.timestamp())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, created_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, created_at FROM users WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Insert the user unless a row with this id already exists.
    ///
    /// Used at startup for the desktop user, which never registers.
    pub async fn ensure_exists<'e, E>(
        executor: E,
        id: Uuid,
        email: &str,
        name: &str,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            "INSERT OR IGNORE INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(email)
        .bind(name)
        .bind(Utc::now().timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }
}
