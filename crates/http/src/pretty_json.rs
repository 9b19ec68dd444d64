//! JSON responder with 2-space indentation.
//!
//! The per-invocation handlers render bodies with the same
//! `serde_json::to_string_pretty`, so both deployments emit identical bytes.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "response serialization failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}
