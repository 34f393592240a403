//! Crop Scorer Rust Implementation
//!
//! Scores a crop's health from current sensor readings against a static
//! table of optimal growing ranges, predicts yield and produces advice.
//!
//! Module layout:
//! - `conditions`: Parameters, optimal ranges and readings
//! - `catalog`: Immutable crop reference table (built-in or loaded from JSON)
//! - `suitability/`: Range comparison, analysis types and advice text
//! - `scorer`: `CropScorer`, the entry point presentation code calls
//!
//! ```
//! use crop_scorer_rust::{CropScorer, Reading};
//!
//! let scorer = CropScorer::builtin()?;
//! let reading = Reading::new(45.0, 24.0, 65.0, 6.8, 75.0);
//! let analysis = scorer.analyze("tomato", &reading)?;
//! assert!(analysis.health_score <= 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod conditions;
pub mod catalog;
pub mod suitability;
pub mod scorer;

// Re-export commonly used types
pub use error::{CatalogError, CropError};
pub use conditions::{OptimalConditions, OptimalRange, Parameter, Reading};
pub use catalog::{CropCatalog, CropProfile, YieldCategory};
pub use suitability::{CropAnalysis, Deviation, HealthStatus, ParameterStatus, Severity};
pub use scorer::{analyze_profile, predict_yield, CropScorer};
