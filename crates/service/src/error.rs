//! Typed error enum for the service layer.

use thiserror::Error;
use travel_recs_core::{DatasetError, RecommendError};

/// Service-layer error unifying dataset and lookup failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request could not be answered (no data, bad input, unknown destination).
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    /// Dataset failed to load.
    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Recommend(RecommendError::NotFound { .. }))
    }

    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::Recommend(RecommendError::DataUnavailable) | Self::Dataset(_))
    }
}
