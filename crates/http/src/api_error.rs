//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON error responses. Each endpoint has its
//! own fixed 500 message; the underlying error is logged, never sent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use holy_word_core::ErrorBody;
use holy_word_core::constants::NO_VERSE_FOUND;
use holy_word_service::ServiceError;

use crate::PrettyJson;

#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found — nothing to serve (empty dataset).
    NotFound(&'static str),
    /// 500 Internal Server Error — details logged, `message` returned.
    Internal { message: &'static str, error: ServiceError },
}

impl ApiError {
    /// Map a service error, using `failure_message` as the 500 body.
    pub fn from_service(error: ServiceError, failure_message: &'static str) -> Self {
        match error {
            ServiceError::NoVerseFound => Self::NotFound(NO_VERSE_FOUND),
            error @ ServiceError::DatasetUnavailable(_) => {
                Self::Internal { message: failure_message, error }
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) => msg,
            Self::Internal { message, error } => {
                tracing::error!(error = %error, "request failed");
                message
            },
        };
        (status, PrettyJson(ErrorBody::new(message))).into_response()
    }
}
