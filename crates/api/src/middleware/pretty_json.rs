use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::error::AppError;

/// Query parameter that switches on indented output.
pub const PRETTY_PARAM: &str = "pretty";

/// Re-serialize JSON responses with indentation when the request query
/// carries a `pretty` parameter (with or without a value).
pub async fn pretty_json(req: Request, next: Next) -> Response {
    let wants_pretty = req.uri().query().is_some_and(has_pretty_param);
    let response = next.run(req).await;

    if !wants_pretty || !is_json(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return AppError::InternalError(format!("Failed to buffer response: {err}"))
                .into_response();
        }
    };

    let pretty = match serde_json::from_slice::<Value>(&bytes)
        .and_then(|value| serde_json::to_vec_pretty(&value))
    {
        Ok(pretty) => pretty,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(pretty))
}

fn has_pretty_param(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair.split('=').next() == Some(PRETTY_PARAM))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_param_detection() {
        assert!(has_pretty_param("pretty"));
        assert!(has_pretty_param("pretty=1"));
        assert!(has_pretty_param("a=b&pretty"));
        assert!(!has_pretty_param("prettyish=1"));
        assert!(!has_pretty_param("a=pretty"));
        assert!(!has_pretty_param(""));
    }
}
