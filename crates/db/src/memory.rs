//! In-process store backed by a lock-guarded map of user to todos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use todos_core::todo::{Todo, TodoPatch};
use todos_core::types::TodoId;

use crate::store::{StoreError, TodoStore};

/// Keeps every user's todos in memory. Contents are lost on restart.
///
/// Each operation holds the lock across its whole read-modify-write, so
/// concurrent writers to the same user never interleave.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self, user: &str) -> Result<Option<Vec<Todo>>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(user).cloned())
    }

    async fn get(&self, user: &str, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .get(user)
            .and_then(|todos| todos.iter().find(|t| t.id == id))
            .cloned())
    }

    async fn insert(&self, user: &str, todo: &Todo) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let todos = users.entry(user.to_string()).or_insert_with(|| {
            tracing::debug!(user = %user, "User created");
            Vec::new()
        });
        todos.push(todo.clone());
        Ok(())
    }

    async fn update(
        &self,
        user: &str,
        id: TodoId,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, StoreError> {
        let mut users = self.users.write().await;
        let Some(todo) = users
            .get_mut(user)
            .and_then(|todos| todos.iter_mut().find(|t| t.id == id))
        else {
            return Ok(None);
        };
        todo.apply(patch);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, user: &str, id: TodoId) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        let Some(todos) = users.get_mut(user) else {
            return Ok(false);
        };
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() < before)
    }

    async fn clear(&self, user: &str) -> Result<Option<u64>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(user).map(|todos| {
            let removed = todos.len() as u64;
            todos.clear();
            removed
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use todos_core::todo::NewTodo;

    use super::*;

    fn todo(title: &str) -> Todo {
        Todo::new(NewTodo {
            title: title.to_string(),
            status: "todo".to_string(),
        })
    }

    #[tokio::test]
    async fn unknown_user_has_no_list() {
        let store = MemoryStore::new();
        assert_matches!(store.list("alice").await, Ok(None));
        assert_matches!(store.clear("alice").await, Ok(None));
    }

    #[tokio::test]
    async fn insert_creates_user_and_keeps_order() {
        let store = MemoryStore::new();
        let first = todo("first item");
        let second = todo("second item");
        store.insert("alice", &first).await.unwrap();
        store.insert("alice", &second).await.unwrap();

        let todos = store.list("alice").await.unwrap().unwrap();
        assert_eq!(todos, vec![first, second]);
    }

    #[tokio::test]
    async fn lookups_are_scoped_by_user() {
        let store = MemoryStore::new();
        let item = todo("alice item");
        store.insert("alice", &item).await.unwrap();
        store.insert("bob", &todo("bob item")).await.unwrap();

        assert_eq!(store.get("alice", item.id).await.unwrap(), Some(item.clone()));
        assert_eq!(store.get("bob", item.id).await.unwrap(), None);
        assert!(!store.delete("bob", item.id).await.unwrap());

        let patch = TodoPatch {
            title: None,
            status: Some("done".into()),
        };
        assert_eq!(store.update("bob", item.id, &patch).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let store = MemoryStore::new();
        let item = todo("buy milk");
        store.insert("alice", &item).await.unwrap();

        let patch = TodoPatch {
            title: None,
            status: Some("done".into()),
        };
        let updated = store.update("alice", item.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.status, "done");
        assert_eq!(updated.title, "buy milk");
        assert!(updated.updated_at > item.updated_at);

        let stored = store.get("alice", item.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = MemoryStore::new();
        let keep = todo("keep this");
        let gone = todo("drop this");
        store.insert("alice", &keep).await.unwrap();
        store.insert("alice", &gone).await.unwrap();

        assert!(store.delete("alice", gone.id).await.unwrap());
        assert!(!store.delete("alice", gone.id).await.unwrap());
        assert_eq!(store.list("alice").await.unwrap().unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn clear_keeps_user_marker() {
        let store = MemoryStore::new();
        store.insert("alice", &todo("one item")).await.unwrap();
        store.insert("alice", &todo("two item")).await.unwrap();

        assert_eq!(store.clear("alice").await.unwrap(), Some(2));
        assert_eq!(store.list("alice").await.unwrap(), Some(vec![]));
        assert_eq!(store.clear("alice").await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert("alice", &todo(&format!("task number {i}")))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list("alice").await.unwrap().unwrap().len(), 32);
    }
}
