pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          service and store health
/// /{user}/todos                    list, create, delete all
/// /{user}/todos/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(todo::router())
}
