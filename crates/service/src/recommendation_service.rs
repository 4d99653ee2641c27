use std::path::Path;

use travel_recs_core::{Recommendation, RecommendError, TravelDataset, recommend};

use crate::{Catalog, ServiceError};

pub struct RecommendationService {
    catalog: Catalog,
}

impl RecommendationService {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Loads the dataset at `path`; a load failure leaves the service degraded.
    pub fn load(path: &Path) -> Self {
        Self::new(Catalog::load(path))
    }

    /// Loads the dataset at `path`, failing if it cannot be read or parsed.
    pub fn try_load(path: &Path) -> Result<Self, ServiceError> {
        Ok(Self::new(Catalog::Loaded(TravelDataset::load(path)?)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn destinations(&self) -> &[String] {
        self.catalog.destinations()
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.dataset().is_some()
    }

    /// Resolves a recommendation for raw `destination` and `people` input.
    pub fn recommend(
        &self,
        destination: &str,
        people: &str,
    ) -> Result<Recommendation, ServiceError> {
        let dataset = self.catalog.dataset().ok_or(RecommendError::DataUnavailable)?;
        let result = recommend(dataset, destination, people);
        match result {
            Ok(ref rec) => tracing::debug!(destination, city = %rec.city, "recommendation resolved"),
            Err(ref e) => tracing::debug!(destination, error = %e, "recommendation rejected"),
        }
        result.map_err(ServiceError::from)
    }
}
