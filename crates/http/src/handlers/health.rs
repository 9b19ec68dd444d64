use axum::extract::State;
use std::sync::Arc;

use holy_word_core::HealthResponse;

use crate::{AppState, PrettyJson};

/// Liveness probe. Answers 200 even when the dataset failed to load.
pub async fn health(State(state): State<Arc<AppState>>) -> PrettyJson<HealthResponse> {
    PrettyJson(state.verse_service.health(state.clock.now()))
}
