//! Service layer for holy-word
//!
//! Composes the verse store, projector and daily selector into the read
//! operations exposed by the HTTP server and the per-invocation handlers.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

mod error;
mod verse_service;

pub use error::ServiceError;
pub use verse_service::{VerseService, VerseSource};
