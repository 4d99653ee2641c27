//! Request types (Deserialize)

use serde::Deserialize;

/// Body of `POST /get_recommendations`.
///
/// An absent field reads as blank; an explicit `null` or a non-string value is
/// rejected at deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub people: String,
}
