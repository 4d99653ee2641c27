//! HTTP API server for travel-recs.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use travel_recs_service::RecommendationService;

pub use handlers::index::render_index;
pub use request_types::RecommendationRequest;
pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and never mutated; handlers only read it.
pub struct AppState {
    /// Recommendation lookups over the startup dataset
    pub recommendations: Arc<RecommendationService>,
}

impl AppState {
    #[must_use]
    pub const fn new(recommendations: Arc<RecommendationService>) -> Self {
        Self { recommendations }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::serve_index))
        .route("/get_recommendations", post(handlers::recommendations::get_recommendations))
        .route("/api/destinations", get(handlers::recommendations::list_destinations))
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    match state.recommendations.catalog().unavailable_reason() {
        None => (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None })),
        Some(reason) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse { status: "degraded", message: Some(reason.to_owned()) }),
        ),
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
