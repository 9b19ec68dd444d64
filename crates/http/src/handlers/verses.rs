use axum::extract::State;
use std::sync::Arc;

use holy_word_core::constants::{DAILY_VERSE_FAILED, LIST_VERSES_FAILED};
use holy_word_core::{DailyVerseResponse, VerseListResponse};

use crate::api_error::ApiError;
use crate::{AppState, PrettyJson};

pub async fn list_verses(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<VerseListResponse>, ApiError> {
    state
        .verse_service
        .list_verses()
        .map(PrettyJson)
        .map_err(|e| ApiError::from_service(e, LIST_VERSES_FAILED))
}

pub async fn daily_verse(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<DailyVerseResponse>, ApiError> {
    let now = state.clock.now();
    state
        .verse_service
        .daily_verse(now)
        .map(PrettyJson)
        .map_err(|e| ApiError::from_service(e, DAILY_VERSE_FAILED))
}
