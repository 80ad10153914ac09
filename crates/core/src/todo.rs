//! The `Todo` entity, request body validation and merge semantics.
//!
//! Bodies arrive as raw `serde_json::Value` so the whitelist check can see
//! every key the client sent, including ones no struct would deserialize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateLength;

use crate::error::CoreError;
use crate::types::{self, Timestamp, TodoId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_STATUS: &str = "status";

/// The only keys a create or update body may carry.
pub const ALLOWED_FIELDS: &[&str] = &[FIELD_TITLE, FIELD_STATUS];

/// Status assigned when a create body omits one.
pub const DEFAULT_STATUS: &str = "todo";

pub const TITLE_MIN_LEN: u64 = 3;
pub const TITLE_MAX_LEN: u64 = 100;
pub const STATUS_MIN_LEN: u64 = 3;
pub const STATUS_MAX_LEN: u64 = 50;

pub const MSG_INVALID_BODY: &str = "Invalid request body";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A user-owned todo record as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated create body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub status: String,
}

/// A validated update body. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<String>,
}

impl Todo {
    /// Build a fresh record with a server-assigned id and timestamps.
    pub fn new(input: NewTodo) -> Self {
        let now = types::now();
        Self {
            id: TodoId::new_v4(),
            title: input.title,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields over this record.
    ///
    /// `id` and `created_at` are never touched. `updated_at` always moves
    /// forward, even when the clock has not advanced since the last write.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
        self.updated_at = next_updated_at(self.updated_at, types::now());
    }
}

fn next_updated_at(previous: Timestamp, now: Timestamp) -> Timestamp {
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}

// ---------------------------------------------------------------------------
// Body parsing
// ---------------------------------------------------------------------------

/// Validate a create body.
///
/// Checks run in order (key whitelist, title, status) and the first failure
/// is returned.
pub fn parse_new_todo(body: &Value) -> Result<NewTodo, CoreError> {
    let fields = whitelisted_object(body)?;

    let title = validate_title(fields.get(FIELD_TITLE))?;
    let status = match fields.get(FIELD_STATUS) {
        Some(value) => validate_status(value)?,
        None => DEFAULT_STATUS.to_string(),
    };

    Ok(NewTodo { title, status })
}

/// Validate a partial update body. An object with no keys is rejected.
pub fn parse_todo_patch(body: &Value) -> Result<TodoPatch, CoreError> {
    let fields = whitelisted_object(body)?;
    if fields.is_empty() {
        return Err(invalid_body());
    }

    let title = match fields.get(FIELD_TITLE) {
        Some(value) => Some(validate_title(Some(value))?),
        None => None,
    };
    let status = match fields.get(FIELD_STATUS) {
        Some(value) => Some(validate_status(value)?),
        None => None,
    };

    Ok(TodoPatch { title, status })
}

fn whitelisted_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    let fields = body.as_object().ok_or_else(invalid_body)?;
    if fields
        .keys()
        .any(|key| !ALLOWED_FIELDS.contains(&key.as_str()))
    {
        return Err(invalid_body());
    }
    Ok(fields)
}

fn invalid_body() -> CoreError {
    CoreError::Validation(MSG_INVALID_BODY.into())
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate a title value and return its trimmed form.
///
/// Length is checked before the numeric check, so `"12"` is too short
/// rather than a number.
pub fn validate_title(value: Option<&Value>) -> Result<String, CoreError> {
    let value = value.ok_or_else(|| CoreError::Validation("Title is required".into()))?;
    let title = trimmed_text(value, "Title")?;

    check_length(title, "Title", TITLE_MIN_LEN, TITLE_MAX_LEN)?;
    if is_numeric(title) {
        return Err(CoreError::Validation("Title cannot be a number".into()));
    }

    Ok(title.to_string())
}

/// Validate a status value and return its trimmed form.
pub fn validate_status(value: &Value) -> Result<String, CoreError> {
    let status = trimmed_text(value, "Status")?;
    check_length(status, "Status", STATUS_MIN_LEN, STATUS_MAX_LEN)?;
    Ok(status.to_string())
}

fn trimmed_text<'a>(value: &'a Value, label: &str) -> Result<&'a str, CoreError> {
    let text = value
        .as_str()
        .ok_or_else(|| CoreError::Validation(format!("{label} must be a string")))?
        .trim();
    if text.is_empty() {
        return Err(CoreError::Validation(format!("{label} cannot be empty")));
    }
    Ok(text)
}

fn check_length(text: &str, label: &str, min: u64, max: u64) -> Result<(), CoreError> {
    if !text.validate_length(Some(min), None, None) {
        return Err(CoreError::Validation(format!(
            "{label} must be at least {min} characters long"
        )));
    }
    if !text.validate_length(None, Some(max), None) {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {max} characters long"
        )));
    }
    Ok(())
}

/// True when the text reads as a number, e.g. `"42"`, `"4.5"` or `"1e3"`.
fn is_numeric(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(|n| !n.is_nan())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
