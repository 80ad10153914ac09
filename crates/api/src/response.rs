//! Shared response payloads for todo handlers.

use serde::Serialize;
use todos_core::todo::Todo;

pub const MSG_TODO_CREATED: &str = "Todo created";
pub const MSG_TODO_UPDATED: &str = "Todo updated";
pub const MSG_TODO_DELETED: &str = "Todo deleted successfully";
pub const MSG_TODOS_CLEARED: &str = "All todos deleted successfully";

/// `{ "message": ..., "todo": {...} }`, returned by create and update.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub message: &'static str,
    pub todo: Todo,
}

/// `{ "message": ... }`, returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
