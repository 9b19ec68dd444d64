use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use holy_word_core::{
    ApiUsage, DailyVerseResponse, HealthResponse, VerseListResponse, VerseStore, project,
    project_daily, select_daily,
};

use crate::ServiceError;

/// Where the service gets its dataset from.
#[derive(Debug, Clone)]
pub enum VerseSource {
    /// Loaded once at startup and shared for the process lifetime.
    Loaded(Arc<VerseStore>),
    /// The startup load failed; every request reports it.
    Unavailable(Arc<holy_word_core::CoreError>),
    /// Reloaded from disk on every call.
    OnDemand(PathBuf),
}

/// Read-only verse operations.
#[derive(Debug, Clone)]
pub struct VerseService {
    source: VerseSource,
}

impl VerseService {
    #[must_use]
    pub fn new(source: VerseSource) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn preloaded(store: VerseStore) -> Self {
        Self::new(VerseSource::Loaded(Arc::new(store)))
    }

    /// Load the dataset once. A failed load is logged and kept so that
    /// requests answer with a 500 instead of the process exiting.
    #[must_use]
    pub fn load_at_startup(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match VerseStore::load(&path) {
            Ok(store) => Self::preloaded(store),
            Err(e) => {
                tracing::error!(error = %e, "Error loading verses");
                Self::new(VerseSource::Unavailable(Arc::new(e)))
            },
        }
    }

    #[must_use]
    pub fn on_demand(path: impl Into<PathBuf>) -> Self {
        Self::new(VerseSource::OnDemand(path.into()))
    }

    #[must_use]
    pub fn source(&self) -> &VerseSource {
        &self.source
    }

    fn store(&self) -> Result<Arc<VerseStore>, ServiceError> {
        match &self.source {
            VerseSource::Loaded(store) => Ok(Arc::clone(store)),
            VerseSource::Unavailable(err) => Err(ServiceError::DatasetUnavailable(Arc::clone(err))),
            VerseSource::OnDemand(path) => Ok(Arc::new(VerseStore::load(path)?)),
        }
    }

    /// Every verse in dataset order. An empty dataset is a valid, empty list.
    pub fn list_verses(&self) -> Result<VerseListResponse, ServiceError> {
        let store = self.store()?;
        let verses = store.records().iter().map(project).collect();
        Ok(VerseListResponse { total_verses: store.len(), verses, usage: ApiUsage::default() })
    }

    /// The verse for the UTC day containing `now`.
    pub fn daily_verse(&self, now: DateTime<Utc>) -> Result<DailyVerseResponse, ServiceError> {
        let store = self.store()?;
        let selection = select_daily(now, store.len()).ok_or(ServiceError::NoVerseFound)?;
        let record = store.get(selection.index).ok_or(ServiceError::NoVerseFound)?;
        tracing::debug!(
            index = selection.index,
            day_number = selection.day_number,
            id = record.sequence_number,
            "selected daily verse"
        );
        Ok(project_daily(record, selection, store.len()))
    }

    /// Number of verses currently served, 0 when the dataset is unavailable.
    #[must_use]
    pub fn verses_loaded(&self) -> usize {
        self.store().map(|store| store.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn health(&self, now: DateTime<Utc>) -> HealthResponse {
        HealthResponse {
            status: "OK".to_owned(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            verses_loaded: self.verses_loaded(),
        }
    }
}

#[cfg(test)]
mod tests;
