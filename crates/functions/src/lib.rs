//! Stateless verse handlers.
//!
//! Each invocation reloads the bundled dataset and answers with a
//! serverless-style envelope (`statusCode`, `headers`, `body`). Bodies are
//! rendered exactly like the HTTP server renders them.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal helpers")]

mod endpoint;
mod envelope;

use std::path::Path;

use chrono::{DateTime, Utc};
use holy_word_core::Clock;
use holy_word_core::constants::{DAILY_VERSE_FAILED, LIST_VERSES_FAILED, NO_VERSE_FOUND};
use holy_word_service::{ServiceError, VerseService};

pub use endpoint::{Endpoint, UnknownEndpoint};
pub use envelope::FunctionResponse;

/// `GET /api/verses` as a single invocation.
pub fn handle_verses(dataset: &Path) -> FunctionResponse {
    match VerseService::on_demand(dataset).list_verses() {
        Ok(list) => FunctionResponse::ok(&list, LIST_VERSES_FAILED),
        Err(e) => failure(&e, LIST_VERSES_FAILED),
    }
}

/// `GET /api/daily-verse` as a single invocation.
pub fn handle_daily_verse(dataset: &Path, now: DateTime<Utc>) -> FunctionResponse {
    match VerseService::on_demand(dataset).daily_verse(now) {
        Ok(daily) => FunctionResponse::ok(&daily, DAILY_VERSE_FAILED),
        Err(e) => failure(&e, DAILY_VERSE_FAILED),
    }
}

pub fn invoke(endpoint: Endpoint, dataset: &Path, clock: &dyn Clock) -> FunctionResponse {
    tracing::debug!(%endpoint, dataset = %dataset.display(), "invoking function");
    match endpoint {
        Endpoint::Verses => handle_verses(dataset),
        Endpoint::DailyVerse => handle_daily_verse(dataset, clock.now()),
    }
}

fn failure(error: &ServiceError, failure_message: &str) -> FunctionResponse {
    match error {
        ServiceError::NoVerseFound => FunctionResponse::error(404, NO_VERSE_FOUND),
        ServiceError::DatasetUnavailable(_) => {
            tracing::error!(error = %error, "function invocation failed");
            FunctionResponse::error(500, failure_message)
        },
    }
}
