//! Repository for the `users` table.

use sqlx::PgExecutor;

/// Users are created implicitly and never updated.
pub struct UserRepo;

impl UserRepo {
    /// Whether a user with this name has ever been created.
    pub async fn exists<'e, E>(executor: E, name: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE name = $1)")
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Insert the user if it does not exist yet. Safe to race.
    ///
    /// Returns `true` if this call created the user.
    pub async fn ensure<'e, E>(executor: E, name: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("INSERT INTO users (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                .bind(name)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
