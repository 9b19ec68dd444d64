//! Typed error enum for the service layer.

use std::sync::Arc;

use holy_word_core::CoreError;
use thiserror::Error;

/// Failure of a verse read operation.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The dataset could not be loaded (missing, unreadable, malformed).
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(#[source] Arc<CoreError>),

    /// The dataset is empty, so there is no verse for today.
    #[error("no verse found for today")]
    NoVerseFound,
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoVerseFound)
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::DatasetUnavailable(Arc::new(err))
    }
}
