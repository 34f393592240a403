//! Crop Analysis Types
//!
//! Output structures for the scorer: per-parameter deviations and the
//! display-ready `CropAnalysis` value handed to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::comparator::{RangeComparison, Severity};
use crate::catalog::YieldCategory;
use crate::conditions::Parameter;

/// Overall health bucket derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => HealthStatus::Excellent,
            75..=89 => HealthStatus::Good,
            60..=74 => HealthStatus::Fair,
            40..=59 => HealthStatus::Poor,
            _ => HealthStatus::Critical,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
            HealthStatus::Critical => "Critical",
        }
    }
}

/// Which side of the ideal the current value sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Below,
    Above,
}

/// Deviation of one parameter from its ideal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub parameter: Parameter,
    pub current: f64,
    /// The crop's ideal value
    pub optimal: f64,
    pub deviation_percent: f64,
    pub severity: Severity,
}

impl Deviation {
    pub fn from_comparison(parameter: Parameter, comp: &RangeComparison) -> Self {
        Self {
            parameter,
            current: comp.current,
            optimal: comp.range.ideal,
            deviation_percent: comp.deviation_percent,
            severity: comp.severity(),
        }
    }

    /// `Below` only when strictly under the ideal
    pub fn direction(&self) -> Direction {
        if self.current < self.optimal {
            Direction::Below
        } else {
            Direction::Above
        }
    }
}

/// At most one deviation per parameter
pub type Deviations = SmallVec<[Deviation; 5]>;

/// Complete analysis of a crop against a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAnalysis {
    pub crop_name: String,

    /// 0-100
    pub health_score: u8,

    pub status: HealthStatus,

    /// In evaluation order
    pub deviations: Deviations,

    pub recommendations: Vec<String>,

    pub predicted_yield: YieldCategory,
}

impl CropAnalysis {
    /// Number of parameters with high severity
    pub fn critical_issue_count(&self) -> usize {
        self.deviations
            .iter()
            .filter(|d| d.severity == Severity::High)
            .count()
    }

    pub fn top_recommendations(&self, n: usize) -> &[String] {
        &self.recommendations[..n.min(self.recommendations.len())]
    }

    pub fn deviation(&self, parameter: Parameter) -> Option<&Deviation> {
        self.deviations.iter().find(|d| d.parameter == parameter)
    }
}
