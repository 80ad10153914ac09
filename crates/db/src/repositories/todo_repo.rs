//! Repository for the `todos` table.
//!
//! Every statement filters on `user_name` as well as `id`.

use sqlx::PgExecutor;
use todos_core::todo::Todo;
use todos_core::types::TodoId;

use crate::models::todo::TodoRow;

/// Column list for todos queries.
const COLUMNS: &str = "id, title, status, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a todo that was built by [`Todo::new`].
    pub async fn create<'e, E>(executor: E, user: &str, todo: &Todo) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO todos (id, user_name, title, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(todo.id)
        .bind(user)
        .bind(&todo.title)
        .bind(&todo.status)
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// List a user's todos, oldest first.
    pub async fn list_for_user<'e, E>(executor: E, user: &str) -> Result<Vec<TodoRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE user_name = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(user)
            .fetch_all(executor)
            .await
    }

    /// Find a todo by owner and id.
    pub async fn find<'e, E>(
        executor: E,
        user: &str,
        id: TodoId,
    ) -> Result<Option<TodoRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE user_name = $1 AND id = $2");
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(user)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Like [`TodoRepo::find`] but locks the row until the transaction ends.
    pub async fn find_for_update<'e, E>(
        executor: E,
        user: &str,
        id: TodoId,
    ) -> Result<Option<TodoRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM todos WHERE user_name = $1 AND id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(user)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Write back the mutable fields of an already merged todo.
    pub async fn save<'e, E>(executor: E, user: &str, todo: &Todo) -> Result<TodoRow, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE todos SET title = $1, status = $2, updated_at = $3
             WHERE user_name = $4 AND id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(&todo.title)
            .bind(&todo.status)
            .bind(todo.updated_at)
            .bind(user)
            .bind(todo.id)
            .fetch_one(executor)
            .await
    }

    /// Delete one todo. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, user: &str, id: TodoId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM todos WHERE user_name = $1 AND id = $2")
            .bind(user)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every todo of a user. Returns the number of rows removed.
    pub async fn delete_all_for_user<'e, E>(executor: E, user: &str) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM todos WHERE user_name = $1")
            .bind(user)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
