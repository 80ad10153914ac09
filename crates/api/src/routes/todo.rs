//! Route definitions for per-user todos.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes, keyed by the owning user.
///
/// ```text
/// GET    /{user}/todos              list_todos
/// POST   /{user}/todos              create_todo
/// DELETE /{user}/todos              clear_todos
/// GET    /{user}/todos/{id}         get_todo
/// PUT    /{user}/todos/{id}         update_todo
/// DELETE /{user}/todos/{id}         delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user}/todos",
            get(todo::list_todos)
                .post(todo::create_todo)
                .delete(todo::clear_todos),
        )
        .route(
            "/{user}/todos/{id}",
            get(todo::get_todo)
                .put(todo::update_todo)
                .delete(todo::delete_todo),
        )
}
