//! PostgreSQL-backed [`TodoStore`].

use async_trait::async_trait;
use todos_core::todo::{Todo, TodoPatch};
use todos_core::types::TodoId;

use crate::repositories::{TodoRepo, UserRepo};
use crate::store::{StoreError, TodoStore};
use crate::DbPool;

/// Stores users and todos in the tables created by the bundled migration.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self, user: &str) -> Result<Option<Vec<Todo>>, StoreError> {
        if !UserRepo::exists(&self.pool, user).await? {
            return Ok(None);
        }
        let rows = TodoRepo::list_for_user(&self.pool, user).await?;
        Ok(Some(rows.into_iter().map(Todo::from).collect()))
    }

    async fn get(&self, user: &str, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let row = TodoRepo::find(&self.pool, user, id).await?;
        Ok(row.map(Todo::from))
    }

    async fn insert(&self, user: &str, todo: &Todo) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let created = UserRepo::ensure(&mut *tx, user).await?;
        TodoRepo::create(&mut *tx, user, todo).await?;
        tx.commit().await?;

        if created {
            tracing::debug!(user = %user, "User created");
        }
        Ok(())
    }

    async fn update(
        &self,
        user: &str,
        id: TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let Some(row) = TodoRepo::find_for_update(&mut *tx, user, id).await? else {
            return Ok(None);
        };

        let mut todo = Todo::from(row);
        todo.apply(patch);
        let saved = TodoRepo::save(&mut *tx, user, &todo).await?;
        tx.commit().await?;

        Ok(Some(Todo::from(saved)))
    }

    async fn delete(&self, user: &str, id: TodoId) -> Result<bool, StoreError> {
        Ok(TodoRepo::delete(&self.pool, user, id).await?)
    }

    async fn clear(&self, user: &str) -> Result<Option<u64>, StoreError> {
        let mut tx = self.pool.begin().await?;
        if !UserRepo::exists(&mut *tx, user).await? {
            return Ok(None);
        }
        let removed = TodoRepo::delete_all_for_user(&mut *tx, user).await?;
        tx.commit().await?;
        Ok(Some(removed))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
