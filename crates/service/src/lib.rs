//! Service layer for travel-recs
//!
//! Owns the destination catalog built at startup and answers recommendation
//! requests against it. HTTP and CLI front-ends both go through here.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod catalog;
mod error;
mod recommendation_service;

pub use catalog::Catalog;
pub use error::ServiceError;
pub use recommendation_service::RecommendationService;
