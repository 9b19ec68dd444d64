//! Read-only verse dataset.
//!
//! Loaded once from a JSON array of [`VerseRecord`]s and never mutated
//! afterwards. Record order is preserved as the cycle order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CoreError, DatasetFailure, Result};
use crate::verse::VerseRecord;

#[derive(Debug, Clone, Default)]
pub struct VerseStore {
    records: Vec<VerseRecord>,
    source: Option<PathBuf>,
}

impl VerseStore {
    /// Read and validate the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::unavailable(path, e))?;
        let records = parse_records(&content).map_err(|reason| CoreError::unavailable(path, reason))?;
        warn_on_suspicious_records(&records);
        tracing::info!(path = %path.display(), "Loaded {} verses", records.len());
        Ok(Self { records, source: Some(path.to_path_buf()) })
    }

    #[must_use]
    pub fn from_records(records: Vec<VerseRecord>) -> Self {
        Self { records, source: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VerseRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    /// File the store was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_records(content: &str) -> std::result::Result<Vec<VerseRecord>, DatasetFailure> {
    let value: Value = serde_json::from_str(content).map_err(DatasetFailure::Malformed)?;
    let Value::Array(items) = value else {
        return Err(DatasetFailure::NotASequence { found: json_kind(&value) });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| DatasetFailure::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn warn_on_suspicious_records(records: &[VerseRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !seen.insert(record.sequence_number) {
            tracing::warn!(index, count = record.sequence_number, "duplicate verse Count");
        }
        if record.english_text.trim().is_empty() {
            tracing::warn!(index, count = record.sequence_number, "verse has no English text");
        }
    }
}
