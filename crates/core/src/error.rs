use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the destination dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),
}

/// Reasons a recommendation request cannot be answered.
///
/// `Display` output is the exact message returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Travel data is not available.")]
    DataUnavailable,

    #[error("Please provide both destination and number of people.")]
    MissingInput,

    #[error("Destination '{input}' not found.")]
    NotFound { input: String },
}
