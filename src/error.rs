//! Error types
//!
//! `CropError` is what the scorer raises at call time; `CatalogError` covers
//! loading and validating the crop reference table.

use std::path::PathBuf;
use thiserror::Error;

use crate::conditions::Parameter;

/// Raised by [`crate::CropScorer::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// The crop identifier has no entry in the reference table
    #[error("Crop type {0} not found in database")]
    UnknownCrop(String),
}

/// Failure while loading the crop reference table
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read crop data file: {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse crop data JSON")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid entry for crop '{crop}'")]
    InvalidCrop {
        crop: String,
        #[source]
        source: serde_json::Error,
    },

    /// `min <= ideal <= max` does not hold, or `ideal` is not positive
    /// (deviation percentages divide by it)
    #[error(
        "Invalid {parameter} range for crop '{crop}': min={min}, ideal={ideal}, max={max}"
    )]
    InvalidRange {
        crop: String,
        parameter: Parameter,
        min: f64,
        ideal: f64,
        max: f64,
    },

    #[error("Duplicate crop identifier '{0}'")]
    DuplicateCrop(String),

    #[error("Crop '{0}' has an empty identifier")]
    MissingId(String),

    #[error("Crop data contains no crops")]
    Empty,
}
