use std::path::PathBuf;

use thiserror::Error;

/// Failures recognised while building a facility map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The input CSV does not exist.
    #[error("{} file not found", .0.display())]
    InputNotFound(PathBuf),

    /// No header matched a latitude or longitude candidate.
    #[error("Could not find latitude/longitude columns")]
    MissingCoordinates { available: Vec<String> },

    /// Nothing survived coercion, the bounding box and the status filters.
    #[error("No facilities found in US coordinate range")]
    EmptyResult,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
