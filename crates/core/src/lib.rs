//! Core types for travel-recs
//!
//! Destination dataset loading, lookup-key normalization, numeric range
//! extraction and the recommendation record shared by every other crate.

pub mod constants;
mod dataset;
mod error;
mod extract;
mod normalize;
mod recommendation;

pub use dataset::*;
pub use error::*;
pub use extract::*;
pub use normalize::*;
pub use recommendation::*;
