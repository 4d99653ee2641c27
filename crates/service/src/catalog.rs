use std::path::Path;

use travel_recs_core::{DatasetError, TravelDataset};

/// Dataset state fixed at startup.
///
/// A failed load is kept as `Unavailable` with its reason, so callers can tell
/// "the file had no usable rows" apart from "the file could not be loaded".
#[derive(Debug)]
pub enum Catalog {
    Loaded(TravelDataset),
    Unavailable { reason: String },
}

impl Catalog {
    /// Loads `path`, degrading to `Unavailable` instead of failing.
    pub fn load(path: &Path) -> Self {
        Self::from_result(TravelDataset::load(path))
    }

    pub fn from_result(result: Result<TravelDataset, DatasetError>) -> Self {
        match result {
            Ok(dataset) => {
                if dataset.is_empty() {
                    tracing::warn!("Travel data loaded but contains no usable rows");
                }
                Self::Loaded(dataset)
            },
            Err(e) => {
                tracing::error!(error = %e, "Error loading travel dataset; serving degraded");
                Self::Unavailable { reason: e.to_string() }
            },
        }
    }

    /// The dataset, if it loaded and has at least one row.
    pub fn dataset(&self) -> Option<&TravelDataset> {
        match self {
            Self::Loaded(ds) if !ds.is_empty() => Some(ds),
            _ => None,
        }
    }

    pub fn destinations(&self) -> &[String] {
        match self {
            Self::Loaded(ds) => ds.destinations(),
            Self::Unavailable { .. } => &[],
        }
    }

    /// Why recommendations cannot be served, or `None` when they can.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(ds) if ds.is_empty() => Some("dataset contains no usable rows"),
            Self::Loaded(_) => None,
            Self::Unavailable { reason } => Some(reason.as_str()),
        }
    }
}
