//! Core types for holy-word
//!
//! Dataset loading, record projection and the daily selector shared by the
//! HTTP server and the per-invocation handlers.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal helpers")]
#![allow(clippy::exhaustive_structs, reason = "Response shapes are fixed")]

mod clock;
pub mod constants;
pub mod env_config;
mod error;
mod projection;
mod selector;
mod store;
mod verse;

pub use clock::*;
pub use error::*;
pub use projection::*;
pub use selector::*;
pub use store::*;
pub use verse::*;
