//! HTTP API server for holy-word.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod pretty_json;

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use holy_word_core::Clock;
use holy_word_core::constants::{DAILY_VERSE_PATH, HEALTH_PATH, VERSES_PATH};
use holy_word_service::VerseService;

pub use pretty_json::PrettyJson;

/// Shared application state for all HTTP handlers.
///
/// The verse store inside the service is immutable after startup, so the
/// state is shared behind a plain `Arc` with no locking.
pub struct AppState {
    pub verse_service: Arc<VerseService>,
    /// Source of "today" for the daily selector
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    #[must_use]
    pub fn new(verse_service: VerseService, clock: Arc<dyn Clock>) -> Self {
        Self { verse_service: Arc::new(verse_service), clock }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(VERSES_PATH, get(handlers::verses::list_verses))
        .route(DAILY_VERSE_PATH, get(handlers::verses::daily_verse))
        .route(HEALTH_PATH, get(handlers::health::health))
        .layer(cors_layer())
        .with_state(state)
}

/// Allow-all CORS for the browser frontend.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
