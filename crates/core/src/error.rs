#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// A missing user namespace.
    pub fn user_not_found(user: &str) -> Self {
        CoreError::NotFound {
            entity: "User",
            key: user.to_string(),
        }
    }

    /// A missing todo, keyed by whatever identifier the client supplied.
    pub fn todo_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Todo",
            key: id.into(),
        }
    }
}
