//! Crop Suitability Engine
//!
//! Compares current sensor readings against a crop's optimal ranges and turns
//! the gaps into severities, scores and advice.
//!
//! ## Architecture
//! - `comparator.rs` - Range comparison, deviation percent, severity, input status
//! - `assessment.rs` - Deviation / CropAnalysis output structs
//! - `advice.rs` - Recommendation text

pub mod comparator;
pub mod assessment;
pub mod advice;

// Re-export public API
pub use comparator::{
    compare_to_range, parameter_status, ParameterStatus, RangeComparison, RangeFit, Severity,
};
pub use assessment::{CropAnalysis, Deviation, Deviations, Direction, HealthStatus};
pub use advice::{generate_recommendations, ALL_OPTIMAL_MESSAGE};
