use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use travel_recs_core::{RecommendError, Recommendation};

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::RecommendationRequest;

/// `POST /get_recommendations`
///
/// Data availability is checked before the body is inspected, so a degraded
/// service answers 500 even for malformed requests.
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    if !state.recommendations.is_ready() {
        return Err(RecommendError::DataUnavailable.into());
    }
    let Json(req) = payload?;
    let rec = state.recommendations.recommend(&req.destination, &req.people)?;
    Ok(Json(rec))
}

/// `GET /api/destinations`
pub async fn list_destinations(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.recommendations.destinations().to_vec())
}
