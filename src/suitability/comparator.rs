//! Range Comparator
//!
//! Core logic for comparing a current reading against a crop's optimal range
//! (min / ideal / max) and expressing the gap as a percentage of the ideal.

use crate::conditions::OptimalRange;
use serde::{Deserialize, Serialize};

/// Where a current value sits relative to the optimal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// current < min
    BelowRange,

    /// min <= current <= max
    WithinRange,

    /// current > max
    AboveRange,
}

/// Result of comparing a current value to an optimal range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeComparison {
    pub fit: RangeFit,

    pub current: f64,

    pub range: OptimalRange,

    /// Gap as a percentage of `ideal`, never negative.
    ///
    /// Inside the range this is the distance to `ideal`; outside it is the
    /// distance to the nearest boundary.
    pub deviation_percent: f64,
}

impl RangeComparison {
    pub fn is_within_range(&self) -> bool {
        self.fit == RangeFit::WithinRange
    }

    pub fn severity(&self) -> Severity {
        Severity::from_deviation(self.deviation_percent)
    }

    /// Per-parameter contribution to the health score, clamped to [0, 100]
    pub fn score(&self) -> f64 {
        // f64::max discards NaN, so an unusable value scores 0
        (100.0 - self.deviation_percent).max(0.0).min(100.0)
    }
}

/// Compare a current value against an optimal range
pub fn compare_to_range(current: f64, range: &OptimalRange) -> RangeComparison {
    let OptimalRange { min, ideal, max } = *range;

    let (fit, gap) = if range.contains(current) {
        (RangeFit::WithinRange, (current - ideal).abs())
    } else if current < min {
        (RangeFit::BelowRange, min - current)
    } else {
        (RangeFit::AboveRange, current - max)
    };

    RangeComparison {
        fit,
        current,
        range: *range,
        deviation_percent: gap / ideal * 100.0,
    }
}

// ============================================================================
// Severity
// ============================================================================

/// Severity of a deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// deviation <= 10%
    Low,
    /// deviation <= 25%
    Medium,
    High,
}

impl Severity {
    /// Step function with inclusive breakpoints at 10 and 25
    pub fn from_deviation(deviation_percent: f64) -> Self {
        if deviation_percent <= 10.0 {
            Severity::Low
        } else if deviation_percent <= 25.0 {
            Severity::Medium
        } else {
            Severity::High
        }
    }
}

// ============================================================================
// Input status badge
// ============================================================================

/// Coarse status shown next to each manual input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    /// Inside the optimal range
    Optimal,
    /// Outside the range but within 15% of ideal
    Acceptable,
    Critical,
    /// No range or no value to compare
    Unknown,
}

/// Relative distance to ideal tolerated for `Acceptable`
const ACCEPTABLE_TOLERANCE: f64 = 0.15;

impl ParameterStatus {
    pub fn from_comparison(comp: &RangeComparison) -> Self {
        if comp.is_within_range() {
            ParameterStatus::Optimal
        } else if (comp.current - comp.range.ideal).abs() / comp.range.ideal
            <= ACCEPTABLE_TOLERANCE
        {
            ParameterStatus::Acceptable
        } else {
            ParameterStatus::Critical
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ParameterStatus::Optimal => "optimal",
            ParameterStatus::Acceptable => "acceptable",
            ParameterStatus::Critical => "critical",
            ParameterStatus::Unknown => "unknown",
        }
    }
}

/// Status for an optional value against an optional range
pub fn parameter_status(current: Option<f64>, range: Option<&OptimalRange>) -> ParameterStatus {
    match (current, range) {
        (Some(current), Some(range)) => {
            ParameterStatus::from_comparison(&compare_to_range(current, range))
        }
        _ => ParameterStatus::Unknown,
    }
}
