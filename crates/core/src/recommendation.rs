//! Recommendation record and the per-request resolver.

use serde::Serialize;

use crate::constants::{CURRENCY_SYMBOL, NOT_AVAILABLE};
use crate::{DestinationRecord, RecommendError, TravelDataset, WholeNumber, extract_max};

/// Recommended stay: a day count, or the "Not available" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Days {
    Count(WholeNumber),
    Unavailable(String),
}

/// Response record returned for a matched destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Nearby Tourist Places")]
    pub nearby_places: String,
    #[serde(rename = "Overall Cost (INR)")]
    pub overall_cost: String,
    #[serde(rename = "Days")]
    pub days: Days,
    #[serde(rename = "Type of Place")]
    pub place_type: String,
    #[serde(rename = "State")]
    pub state: String,
}

impl From<&DestinationRecord> for Recommendation {
    fn from(record: &DestinationRecord) -> Self {
        // Zero counts as "no value" for both fields.
        let max_cost = extract_max(Some(record.estimated_cost.as_str())).filter(|n| !n.is_zero());
        let max_days = extract_max(Some(record.recommended_days.as_str())).filter(|n| !n.is_zero());
        Self {
            city: record.destination.clone(),
            nearby_places: record.nearby_places.clone(),
            overall_cost: max_cost
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |c| format!("{CURRENCY_SYMBOL}{c}")),
            days: max_days.map_or_else(|| Days::Unavailable(NOT_AVAILABLE.to_owned()), Days::Count),
            place_type: record.place_type.clone(),
            state: record.state.clone(),
        }
    }
}

/// Resolves a recommendation for raw user input.
///
/// Both inputs must be non-blank after trimming. `people` is only checked for
/// presence. The not-found error carries `destination` exactly as given.
pub fn recommend(
    dataset: &TravelDataset,
    destination: &str,
    people: &str,
) -> Result<Recommendation, RecommendError> {
    if dataset.is_empty() {
        return Err(RecommendError::DataUnavailable);
    }
    if destination.trim().is_empty() || people.trim().is_empty() {
        return Err(RecommendError::MissingInput);
    }
    let record = dataset
        .find(destination)
        .ok_or_else(|| RecommendError::NotFound { input: destination.to_owned() })?;
    Ok(Recommendation::from(record))
}
