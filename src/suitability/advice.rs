//! Advice Generation
//!
//! Turns deviations into an ordered list of human-readable recommendations.
//! High-severity deviations get parameter-specific actions chosen by
//! `(parameter, direction)`; medium ones get a generic monitoring note.

use super::assessment::{Deviation, Direction};
use super::comparator::Severity;
use crate::conditions::Parameter;

/// Emitted when no deviation warrants a message
pub const ALL_OPTIMAL_MESSAGE: &str =
    "All parameters are within optimal range - maintain current conditions";

/// Corrective action for a high-severity deviation
pub fn corrective_action(parameter: Parameter, direction: Direction, deviation_percent: f64) -> String {
    use Direction::{Above, Below};
    use Parameter::*;

    match (parameter, direction) {
        (SoilMoisture, Below) => format!(
            "Urgent: Increase watering - soil moisture is {:.1}% below optimal",
            deviation_percent
        ),
        (SoilMoisture, Above) => format!(
            "Urgent: Reduce watering - soil is oversaturated by {:.1}%",
            deviation_percent
        ),
        (Temperature, Below) => format!(
            "Consider greenhouse heating - temperature is {:.1}% below optimal",
            deviation_percent
        ),
        (Temperature, Above) => format!(
            "Provide shade or cooling - temperature is {:.1}% above optimal",
            deviation_percent
        ),
        (Humidity, Below) => "Increase humidity through misting or mulching".to_string(),
        (Humidity, Above) => "Improve ventilation to reduce excess humidity".to_string(),
        (PhLevel, Below) => "Add lime to increase soil pH".to_string(),
        (PhLevel, Above) => "Add sulfur or organic matter to lower soil pH".to_string(),
        (LightIntensity, Below) => {
            "Consider supplemental lighting or pruning for better light exposure".to_string()
        }
        (LightIntensity, Above) => "Provide shade during peak sun hours".to_string(),
    }
}

/// Note for a medium-severity deviation
pub fn monitoring_note(parameter: Parameter, deviation_percent: f64) -> String {
    format!(
        "Monitor {} - currently {:.1}% from optimal",
        parameter.key(),
        deviation_percent
    )
}

/// Advice for one deviation, if any
pub fn advice_for(deviation: &Deviation) -> Option<String> {
    match deviation.severity {
        Severity::High => Some(corrective_action(
            deviation.parameter,
            deviation.direction(),
            deviation.deviation_percent,
        )),
        Severity::Medium => Some(monitoring_note(deviation.parameter, deviation.deviation_percent)),
        Severity::Low => None,
    }
}

/// Recommendations in deviation order, or the single all-optimal message
pub fn generate_recommendations(deviations: &[Deviation]) -> Vec<String> {
    let mut recommendations: Vec<String> = deviations.iter().filter_map(advice_for).collect();

    if recommendations.is_empty() {
        recommendations.push(ALL_OPTIMAL_MESSAGE.to_string());
    }

    recommendations
}
