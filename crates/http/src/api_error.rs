//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses of the form `{"error": "message"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use travel_recs_core::RecommendError;
use travel_recs_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the error server-side and also echoes its message to the
/// client as `Internal Server Error: <message>`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: required input missing or blank.
    BadRequest(String),
    /// 404 Not Found: no destination matches.
    NotFound(String),
    /// 500 with a fixed message: dataset not loaded or empty.
    DataUnavailable(String),
    /// 500 Internal Server Error: anything unexpected.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::DataUnavailable(msg) => {
                tracing::warn!("recommendation requested while travel data is unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal Server Error: {err}"))
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        let msg = err.to_string();
        match err {
            RecommendError::DataUnavailable => Self::DataUnavailable(msg),
            RecommendError::MissingInput => Self::BadRequest(msg),
            RecommendError::NotFound { .. } => Self::NotFound(msg),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Recommend(e) => e.into(),
            ServiceError::Dataset(_) => Self::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Internal(anyhow::anyhow!(rejection.body_text()))
    }
}
