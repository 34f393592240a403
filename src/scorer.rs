//! Crop Scorer - Main entry point for crop health analysis
//!
//! Ties the catalog and the suitability engine together: looks up a crop,
//! compares every parameter of a reading against its optimal range and builds
//! the `CropAnalysis` (health score, status, yield prediction, advice).
//!
//! The scorer holds no mutable state; it borrows an immutable catalog and can
//! be shared freely across threads.

use crate::catalog::{CropCatalog, CropProfile, YieldCategory};
use crate::conditions::{OptimalConditions, Parameter, Reading};
use crate::error::{CatalogError, CropError};
use crate::suitability::advice::generate_recommendations;
use crate::suitability::assessment::{CropAnalysis, Deviation, Deviations, HealthStatus};
use crate::suitability::comparator::{compare_to_range, parameter_status, ParameterStatus};

/// Weight of the current health score in the yield prediction
const HEALTH_WEIGHT: f64 = 0.7;

/// Weight of the historical yield average in the yield prediction
const HISTORY_WEIGHT: f64 = 0.3;

/// Main crop scorer
#[derive(Debug, Clone, Copy)]
pub struct CropScorer<'c> {
    catalog: &'c CropCatalog,
}

impl CropScorer<'static> {
    /// Scorer over the built-in reference table
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(CropCatalog::builtin()?))
    }
}

impl<'c> CropScorer<'c> {
    pub fn new(catalog: &'c CropCatalog) -> Self {
        Self { catalog }
    }

    /// Analyze a crop against the current reading.
    ///
    /// Fails only when the crop id is not in the catalog.
    pub fn analyze(&self, crop_id: &str, reading: &Reading) -> Result<CropAnalysis, CropError> {
        let crop = self
            .catalog
            .get(crop_id)
            .ok_or_else(|| CropError::UnknownCrop(crop_id.to_string()))?;

        let analysis = analyze_profile(crop, reading);

        tracing::debug!(
            "Analyzed {}: health {} ({:?}), predicted yield {:?}, {} recommendation(s)",
            crop_id,
            analysis.health_score,
            analysis.status,
            analysis.predicted_yield,
            analysis.recommendations.len()
        );

        Ok(analysis)
    }

    /// Optimal ranges for a crop, `None` if unknown.
    ///
    /// Unlike [`CropScorer::analyze`] an unknown crop is not an error here.
    pub fn optimal_conditions(&self, crop_id: &str) -> Option<&'c OptimalConditions> {
        self.catalog.get(crop_id).map(|crop| &crop.optimal_conditions)
    }

    /// Crop identifiers in table definition order
    pub fn list_crops(&self) -> Vec<&'c str> {
        self.catalog.ids().collect()
    }

    pub fn crop_profile(&self, crop_id: &str) -> Option<&'c CropProfile> {
        self.catalog.get(crop_id)
    }

    /// Reading set to every ideal value of the crop
    pub fn ideal_reading(&self, crop_id: &str) -> Option<Reading> {
        self.optimal_conditions(crop_id).map(Reading::at_ideal)
    }

    /// Input status for each parameter, in evaluation order
    pub fn reading_status(
        &self,
        crop_id: &str,
        reading: &Reading,
    ) -> Option<Vec<(Parameter, ParameterStatus)>> {
        let conditions = self.optimal_conditions(crop_id)?;
        Some(
            Parameter::ALL
                .into_iter()
                .map(|p| (p, parameter_status(reading.get(p), conditions.get(p))))
                .collect(),
        )
    }
}

// ============================================================================
// Scoring
// ============================================================================

/// Analyze a crop profile against a reading.
///
/// Parameters lacking either an optimal range or a current value are skipped:
/// they get no deviation and add 0 to the score total, but the total is
/// still divided by all five parameters. `deviations` therefore holds one
/// entry per parameter that had both a range and a value, so a reading with
/// a gap yields fewer than five entries rather than a NaN placeholder.
pub fn analyze_profile(crop: &CropProfile, reading: &Reading) -> CropAnalysis {
    let mut deviations = Deviations::new();
    let mut total_score = 0.0;

    for parameter in Parameter::ALL {
        let (Some(range), Some(current)) =
            (crop.optimal_conditions.get(parameter), reading.get(parameter))
        else {
            continue;
        };

        let comparison = compare_to_range(current, range);
        total_score += comparison.score();
        deviations.push(Deviation::from_comparison(parameter, &comparison));
    }

    let health_score = mean_health_score(total_score);
    let status = HealthStatus::from_score(health_score);
    let recommendations = generate_recommendations(&deviations);
    let predicted_yield = predict_yield(health_score, crop.historical_average());

    CropAnalysis {
        crop_name: crop.name.clone(),
        health_score,
        status,
        deviations,
        recommendations,
        predicted_yield,
    }
}

/// Mean over the fixed parameter count, rounded
fn mean_health_score(total_score: f64) -> u8 {
    let mean = total_score / Parameter::ALL.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// Blend current health with the historical average
pub fn predict_yield(health_score: u8, historical_average: f64) -> YieldCategory {
    let combined = f64::from(health_score) * HEALTH_WEIGHT + historical_average * HISTORY_WEIGHT;
    YieldCategory::from_score(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::{Severity, ALL_OPTIMAL_MESSAGE};
    use approx::assert_relative_eq;

    fn scorer() -> CropScorer<'static> {
        CropScorer::builtin().unwrap()
    }

    #[test]
    fn test_tomato_low_soil_moisture() {
        let reading = scorer()
            .ideal_reading("tomato")
            .unwrap()
            .with(Parameter::SoilMoisture, 30.0);
        let analysis = scorer().analyze("tomato", &reading).unwrap();

        let soil = analysis.deviation(Parameter::SoilMoisture).unwrap();
        assert_relative_eq!(soil.deviation_percent, 100.0 / 6.0, epsilon = 1e-9);
        assert_eq!(soil.severity, Severity::Medium);
        assert_eq!(soil.optimal, 60.0);
    }

    #[test]
    fn test_ideal_reading_scores_100() {
        for crop_id in scorer().list_crops() {
            let reading = scorer().ideal_reading(crop_id).unwrap();
            let analysis = scorer().analyze(crop_id, &reading).unwrap();

            assert_eq!(analysis.health_score, 100, "{}", crop_id);
            assert_eq!(analysis.status, HealthStatus::Excellent);
            assert_eq!(analysis.deviations.len(), 5);
            assert!(analysis
                .deviations
                .iter()
                .all(|d| d.deviation_percent == 0.0 && d.severity == Severity::Low));
            assert_eq!(analysis.recommendations, vec![ALL_OPTIMAL_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn test_dashboard_default_reading() {
        // 45% soil moisture sits exactly 25% from the tomato ideal of 60
        let reading = Reading::new(45.0, 24.0, 65.0, 6.8, 75.0);
        let analysis = scorer().analyze("tomato", &reading).unwrap();

        // scores: 75, 100, 100, 95.38, 93.75 -> 92.83
        assert_eq!(analysis.health_score, 93);
        assert_eq!(analysis.status, HealthStatus::Excellent);
        // 93 * 0.7 + (580 / 7) * 0.3 = 89.96
        assert_eq!(analysis.predicted_yield, YieldCategory::Good);
        assert_eq!(
            analysis.recommendations,
            vec!["Monitor soilMoisture - currently 25.0% from optimal".to_string()]
        );
        assert_eq!(analysis.critical_issue_count(), 0);
    }

    #[test]
    fn test_unknown_crop() {
        let reading = Reading::new(45.0, 24.0, 65.0, 6.8, 75.0);
        assert_eq!(
            scorer().analyze("unicorn", &reading),
            Err(CropError::UnknownCrop("unicorn".to_string()))
        );
        // Lookups degrade to None instead
        assert!(scorer().optimal_conditions("unicorn").is_none());
        assert!(scorer().crop_profile("unicorn").is_none());
        assert!(scorer().ideal_reading("unicorn").is_none());
        assert!(scorer().reading_status("unicorn", &reading).is_none());
    }

    #[test]
    fn test_health_score_stays_in_bounds() {
        let extremes = [
            Reading::new(0.0, 0.0, 0.0, 0.0, 0.0),
            Reading::new(1000.0, 1000.0, 1000.0, 1000.0, 1000.0),
            Reading::new(f64::NAN, f64::INFINITY, -1.0, 14.0, 50.0),
        ];
        for reading in extremes {
            let analysis = scorer().analyze("tomato", &reading).unwrap();
            assert!(analysis.health_score <= 100);
            assert!(analysis.deviations.iter().all(|d| !(d.deviation_percent < 0.0)));
        }
    }

    #[test]
    fn test_missing_optimal_entry_still_counts_in_denominator() {
        // Only four ranges defined: a perfect reading scores 400 / 5 = 80,
        // not 100. Reproduced deliberately; no renormalization.
        let catalog = CropCatalog::from_json_str(
            r#"{"crops": {"herb": {"name": "Herb", "optimalConditions": {
                "soilMoisture": {"min": 40, "ideal": 50, "max": 60},
                "temperature": {"min": 15, "ideal": 20, "max": 25},
                "humidity": {"min": 50, "ideal": 60, "max": 70},
                "phLevel": {"min": 6.0, "ideal": 6.5, "max": 7.0}
            }, "historicalData": {"lastWeek": [{"yield": "excellent"}]}}}}"#,
        )
        .unwrap();
        let scorer = CropScorer::new(&catalog);

        let reading = Reading::new(50.0, 20.0, 60.0, 6.5, 90.0);
        let analysis = scorer.analyze("herb", &reading).unwrap();

        assert_eq!(analysis.deviations.len(), 4);
        assert!(analysis.deviation(Parameter::LightIntensity).is_none());
        assert_eq!(analysis.health_score, 80);
        assert_eq!(analysis.status, HealthStatus::Good);
        // 80 * 0.7 + 100 * 0.3 = 86
        assert_eq!(analysis.predicted_yield, YieldCategory::Good);
    }

    #[test]
    fn test_missing_reading_value_skipped() {
        let reading = scorer().ideal_reading("tomato").unwrap();
        let partial = Reading {
            humidity: None,
            ..reading
        };
        let analysis = scorer().analyze("tomato", &partial).unwrap();
        assert_eq!(analysis.deviations.len(), 4);
        assert_eq!(analysis.health_score, 80);
    }

    #[test]
    fn test_predict_yield_with_empty_history() {
        // Empty history averages to 0, so even a perfect score caps at 70
        assert_eq!(predict_yield(100, 0.0), YieldCategory::Fair);
        assert_eq!(predict_yield(80, 0.0), YieldCategory::Poor);
        assert_eq!(predict_yield(100, 100.0), YieldCategory::Excellent);
    }

    #[test]
    fn test_profile_without_history_predicts_from_zero_average() {
        // No historicalData key at all: treated as an empty log, not NaN
        let catalog = CropCatalog::from_json_str(
            r#"{"crops": {"okra": {"name": "Okra", "optimalConditions": {
                "soilMoisture": {"min": 40, "ideal": 50, "max": 60},
                "temperature": {"min": 20, "ideal": 27, "max": 35},
                "humidity": {"min": 50, "ideal": 65, "max": 80},
                "phLevel": {"min": 6.0, "ideal": 6.5, "max": 7.0},
                "lightIntensity": {"min": 60, "ideal": 80, "max": 95}
            }}}}"#,
        )
        .unwrap();
        let scorer = CropScorer::new(&catalog);

        let analysis = scorer
            .analyze("okra", &scorer.ideal_reading("okra").unwrap())
            .unwrap();
        assert_eq!(analysis.health_score, 100);
        // 100 * 0.7 + 0 * 0.3 = 70
        assert_eq!(analysis.predicted_yield, YieldCategory::Fair);
    }

    #[test]
    fn test_reading_status() {
        let reading = Reading {
            light_intensity: None,
            ..Reading::new(45.0, 31.0, 65.0, 5.9, 0.0)
        };
        let status = scorer().reading_status("tomato", &reading).unwrap();
        assert_eq!(
            status,
            vec![
                (Parameter::SoilMoisture, ParameterStatus::Optimal),
                // 31 is above 29, |31 - 24| / 24 = 0.29
                (Parameter::Temperature, ParameterStatus::Critical),
                (Parameter::Humidity, ParameterStatus::Optimal),
                // 5.9 is below 6.0, |5.9 - 6.5| / 6.5 = 0.09
                (Parameter::PhLevel, ParameterStatus::Acceptable),
                (Parameter::LightIntensity, ParameterStatus::Unknown),
            ]
        );
    }
}
