//! Growing conditions: parameters, optimal ranges and sensor readings
//!
//! Defines the five monitored parameters, the per-crop optimal range table
//! (min/ideal/max) and the `Reading` a presentation layer hands to the scorer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monitored growing parameter.
///
/// Variant order is the evaluation order used by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    SoilMoisture,
    Temperature,
    Humidity,
    PhLevel,
    LightIntensity,
}

impl Parameter {
    /// All parameters in evaluation order
    pub const ALL: [Parameter; 5] = [
        Parameter::SoilMoisture,
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::PhLevel,
        Parameter::LightIntensity,
    ];

    /// Key used in the reference data and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::SoilMoisture => "soilMoisture",
            Parameter::Temperature => "temperature",
            Parameter::Humidity => "humidity",
            Parameter::PhLevel => "phLevel",
            Parameter::LightIntensity => "lightIntensity",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::SoilMoisture => "Soil Moisture",
            Parameter::Temperature => "Temperature",
            Parameter::Humidity => "Humidity",
            Parameter::PhLevel => "pH Level",
            Parameter::LightIntensity => "Light Intensity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::SoilMoisture | Parameter::Humidity | Parameter::LightIntensity => "%",
            Parameter::Temperature => "°C",
            Parameter::PhLevel => "pH",
        }
    }

    /// Bounds of the manual input control for this parameter (min, max)
    pub fn input_bounds(&self) -> (f64, f64) {
        match self {
            Parameter::SoilMoisture | Parameter::Humidity | Parameter::LightIntensity => {
                (0.0, 100.0)
            }
            Parameter::Temperature => (0.0, 50.0),
            Parameter::PhLevel => (4.0, 9.0),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Optimal range for one parameter of one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub ideal: f64,
    pub max: f64,
}

impl OptimalRange {
    pub fn new(min: f64, ideal: f64, max: f64) -> Self {
        Self { min, ideal, max }
    }

    /// `min <= ideal <= max` and `ideal > 0`
    pub fn is_valid(&self) -> bool {
        self.min <= self.ideal && self.ideal <= self.max && self.ideal > 0.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Format for display, e.g. "40-80% (ideal 60%)"
    pub fn format_with_unit(&self, unit: &str) -> String {
        format!(
            "{}-{}{} (ideal {}{})",
            self.min, self.max, unit, self.ideal, unit
        )
    }
}

/// Optimal ranges for a crop. Any entry may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<OptimalRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<OptimalRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<OptimalRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_level: Option<OptimalRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_intensity: Option<OptimalRange>,
}

impl OptimalConditions {
    pub fn get(&self, parameter: Parameter) -> Option<&OptimalRange> {
        match parameter {
            Parameter::SoilMoisture => self.soil_moisture.as_ref(),
            Parameter::Temperature => self.temperature.as_ref(),
            Parameter::Humidity => self.humidity.as_ref(),
            Parameter::PhLevel => self.ph_level.as_ref(),
            Parameter::LightIntensity => self.light_intensity.as_ref(),
        }
    }

    /// Defined ranges in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &OptimalRange)> + '_ {
        Parameter::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|range| (p, range)))
    }
}

/// Current sensor values. A value may be missing.
///
/// Unknown keys in JSON input (e.g. `waterUsage` from the dashboard feed)
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_intensity: Option<f64>,
}

impl Reading {
    /// Reading with every parameter supplied
    pub fn new(
        soil_moisture: f64,
        temperature: f64,
        humidity: f64,
        ph_level: f64,
        light_intensity: f64,
    ) -> Self {
        Self {
            soil_moisture: Some(soil_moisture),
            temperature: Some(temperature),
            humidity: Some(humidity),
            ph_level: Some(ph_level),
            light_intensity: Some(light_intensity),
        }
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::SoilMoisture => self.soil_moisture,
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::PhLevel => self.ph_level,
            Parameter::LightIntensity => self.light_intensity,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::SoilMoisture => &mut self.soil_moisture,
            Parameter::Temperature => &mut self.temperature,
            Parameter::Humidity => &mut self.humidity,
            Parameter::PhLevel => &mut self.ph_level,
            Parameter::LightIntensity => &mut self.light_intensity,
        };
        *slot = Some(value);
    }

    /// Builder-style variant of [`Reading::set`]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.set(parameter, value);
        self
    }

    /// Reading set to every defined `ideal`; parameters without a range stay empty
    pub fn at_ideal(conditions: &OptimalConditions) -> Self {
        conditions
            .iter()
            .fold(Reading::default(), |reading, (p, range)| {
                reading.with(p, range.ideal)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_serde_keys() {
        for p in Parameter::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.key()));
        }
    }

    #[test]
    fn test_parameter_metadata() {
        assert_eq!(Parameter::SoilMoisture.label(), "Soil Moisture");
        assert_eq!(Parameter::PhLevel.label(), "pH Level");
        assert_eq!(Parameter::LightIntensity.label(), "Light Intensity");

        assert_eq!(Parameter::Temperature.unit(), "°C");
        assert_eq!(Parameter::PhLevel.unit(), "pH");
        assert_eq!(Parameter::Humidity.unit(), "%");

        assert_eq!(Parameter::SoilMoisture.input_bounds(), (0.0, 100.0));
        assert_eq!(Parameter::Temperature.input_bounds(), (0.0, 50.0));
        assert_eq!(Parameter::Humidity.input_bounds(), (0.0, 100.0));
        assert_eq!(Parameter::PhLevel.input_bounds(), (4.0, 9.0));
        assert_eq!(Parameter::LightIntensity.input_bounds(), (0.0, 100.0));
    }

    #[test]
    fn test_builtin_ranges_fit_input_bounds() {
        let catalog = crate::catalog::CropCatalog::builtin().unwrap();
        for id in catalog.ids() {
            let conditions = &catalog.get(id).unwrap().optimal_conditions;
            for (p, range) in conditions.iter() {
                let (lo, hi) = p.input_bounds();
                assert!(range.min >= lo && range.max <= hi, "{} {}", id, p);
            }
        }
    }

    #[test]
    fn test_reading_ignores_unknown_fields() {
        let reading: Reading = serde_json::from_str(
            r#"{"soilMoisture": 45, "temperature": 24, "waterUsage": 125}"#,
        )
        .unwrap();
        assert_eq!(reading.get(Parameter::SoilMoisture), Some(45.0));
        assert_eq!(reading.get(Parameter::Temperature), Some(24.0));
        assert_eq!(reading.get(Parameter::Humidity), None);
    }

    #[test]
    fn test_at_ideal_skips_missing_ranges() {
        let conditions = OptimalConditions {
            soil_moisture: Some(OptimalRange::new(40.0, 60.0, 80.0)),
            ph_level: Some(OptimalRange::new(6.0, 6.5, 7.0)),
            ..Default::default()
        };
        let reading = Reading::at_ideal(&conditions);
        assert_eq!(reading.soil_moisture, Some(60.0));
        assert_eq!(reading.ph_level, Some(6.5));
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.light_intensity, None);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = OptimalRange::new(40.0, 60.0, 80.0);
        assert!(range.contains(40.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(39.9));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_range_validity() {
        assert!(OptimalRange::new(40.0, 60.0, 80.0).is_valid());
        assert!(OptimalRange::new(60.0, 60.0, 60.0).is_valid());
        assert!(!OptimalRange::new(70.0, 60.0, 80.0).is_valid());
        assert!(!OptimalRange::new(0.0, 0.0, 10.0).is_valid());
    }
}
