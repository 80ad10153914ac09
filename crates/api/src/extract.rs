//! Request extractors whose rejections use the JSON error envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use serde_json::Value;

use crate::error::{AppError, JSON_PARSE_MESSAGE};

/// The request body parsed as untyped JSON.
///
/// Unlike [`axum::Json`] this ignores `Content-Type`, and every failure
/// (unreadable body, malformed JSON, empty body) becomes a 400 with
/// `"Failed to parse JSON"`. Shape checks are left to the domain layer so
/// it can see unknown keys.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Failed to read request body");
            AppError::BadRequest(JSON_PARSE_MESSAGE.into())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "Malformed JSON body");
            AppError::BadRequest(JSON_PARSE_MESSAGE.into())
        })?;

        Ok(JsonBody(value))
    }
}

/// [`Path`] with its rejection mapped to [`AppError`], so an undecodable
/// segment such as `/%FF/todos` still answers with `{message, code}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
