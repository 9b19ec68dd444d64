use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur while loading the verse dataset.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("dataset unavailable at {}: {reason}", .path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        reason: DatasetFailure,
    },
}

/// Why a dataset could not be used.
#[derive(Error, Debug)]
pub enum DatasetFailure {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("expected a JSON array of verse records, found {found}")]
    NotASequence { found: &'static str },

    #[error("record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, reason: impl Into<DatasetFailure>) -> Self {
        Self::DatasetUnavailable { path: path.into(), reason: reason.into() }
    }

    /// Whether the dataset file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::DatasetUnavailable { reason: DatasetFailure::Io(e), .. }
                if e.kind() == io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = StdResult<T, CoreError>;
