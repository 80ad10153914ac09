use async_trait::async_trait;
use todos_core::todo::{Todo, TodoPatch};
use todos_core::types::TodoId;

/// Failure inside a store backend. Never caused by client input.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-user todo persistence, shared by all handlers as `Arc<dyn TodoStore>`.
///
/// Todos are always addressed by the `(user, id)` pair. A todo owned by a
/// different user is indistinguishable from a missing one.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos of `user` in insertion order, or `None` for an unknown user.
    async fn list(&self, user: &str) -> Result<Option<Vec<Todo>>, StoreError>;

    async fn get(&self, user: &str, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// Store a new todo, creating the user on first write.
    async fn insert(&self, user: &str, todo: &Todo) -> Result<(), StoreError>;

    /// Merge `patch` into the stored todo as one atomic step.
    async fn update(
        &self,
        user: &str,
        id: TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, StoreError>;

    /// Returns `true` if a todo was removed.
    async fn delete(&self, user: &str, id: TodoId) -> Result<bool, StoreError>;

    /// Remove every todo of `user` but keep the user itself.
    ///
    /// Returns the number removed, or `None` for an unknown user.
    async fn clear(&self, user: &str) -> Result<Option<u64>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
