//! Handlers for the per-user todo endpoints.
//!
//! Every lookup is scoped by the `(user, id)` pair taken from the path.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use todos_core::error::CoreError;
use todos_core::todo::{parse_new_todo, parse_todo_patch, Todo};
use todos_core::types::TodoId;

use crate::error::AppResult;
use crate::extract::{ApiPath, JsonBody};
use crate::response::{
    MessageResponse, TodoResponse, MSG_TODOS_CLEARED, MSG_TODO_CREATED, MSG_TODO_DELETED,
    MSG_TODO_UPDATED,
};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Parse the `{id}` path segment. An id that is not a UUID cannot name an
/// existing todo, so it is reported as not found.
fn parse_todo_id(raw: &str) -> Result<TodoId, CoreError> {
    TodoId::parse_str(raw).map_err(|_| CoreError::todo_not_found(raw))
}

/// Fetch a todo owned by `user` or return 404.
async fn ensure_todo(state: &AppState, user: &str, id: TodoId) -> AppResult<Todo> {
    let todo = state
        .store
        .get(user, id)
        .await?
        .ok_or_else(|| CoreError::todo_not_found(id.to_string()))?;
    Ok(todo)
}

/* --------------------------------------------------------------------------
Collection
-------------------------------------------------------------------------- */

/// GET /{user}/todos
pub async fn list_todos(
    State(state): State<AppState>,
    ApiPath(user): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let todos = state
        .store
        .list(&user)
        .await?
        .ok_or_else(|| CoreError::user_not_found(&user))?;

    Ok(Json(todos))
}

/// POST /{user}/todos
///
/// Validates the body, then stores the todo. The user is created on its
/// first todo.
pub async fn create_todo(
    State(state): State<AppState>,
    ApiPath(user): ApiPath<String>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let input = parse_new_todo(&body)?;
    let todo = Todo::new(input);

    state.store.insert(&user, &todo).await?;

    tracing::info!(user = %user, todo_id = %todo.id, "Todo created");

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            message: MSG_TODO_CREATED,
            todo,
        }),
    ))
}

/// DELETE /{user}/todos
///
/// Removes every todo of the user. The user itself stays known.
pub async fn clear_todos(
    State(state): State<AppState>,
    ApiPath(user): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let removed = state
        .store
        .clear(&user)
        .await?
        .ok_or_else(|| CoreError::user_not_found(&user))?;

    tracing::info!(user = %user, removed, "Todos cleared");

    Ok(Json(MessageResponse {
        message: MSG_TODOS_CLEARED,
    }))
}

/* --------------------------------------------------------------------------
Single todo
-------------------------------------------------------------------------- */

/// GET /{user}/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    ApiPath((user, id)): ApiPath<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let id = parse_todo_id(&id)?;
    let todo = ensure_todo(&state, &user, id).await?;
    Ok(Json(todo))
}

/// PUT /{user}/todos/{id}
///
/// The body is parsed before the existence check and validated after it,
/// so a malformed body is a 400 even for a missing todo.
pub async fn update_todo(
    State(state): State<AppState>,
    ApiPath((user, id)): ApiPath<(String, String)>,
    JsonBody(body): JsonBody,
) -> AppResult<impl IntoResponse> {
    let id = parse_todo_id(&id)?;
    ensure_todo(&state, &user, id).await?;

    let patch = parse_todo_patch(&body)?;

    // The todo may have been deleted between the check and the write.
    let todo = state
        .store
        .update(&user, id, &patch)
        .await?
        .ok_or_else(|| CoreError::todo_not_found(id.to_string()))?;

    tracing::info!(user = %user, todo_id = %todo.id, "Todo updated");

    Ok(Json(TodoResponse {
        message: MSG_TODO_UPDATED,
        todo,
    }))
}

/// DELETE /{user}/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    ApiPath((user, id)): ApiPath<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let id = parse_todo_id(&id)?;

    if !state.store.delete(&user, id).await? {
        return Err(CoreError::todo_not_found(id.to_string()).into());
    }

    tracing::info!(user = %user, todo_id = %id, "Todo deleted");

    Ok(Json(MessageResponse {
        message: MSG_TODO_DELETED,
    }))
}
