//! Crop Catalog - Immutable in-memory crop reference table
//!
//! Loads crop profiles (optimal ranges + recent yield history) once and serves
//! O(1) lookups by crop identifier through an FxHashMap index, while keeping
//! the table's definition order for listing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::conditions::OptimalConditions;
use crate::error::CatalogError;

/// Reference table shipped with the crate
const BUILTIN_CROP_DATA: &str = include_str!("../data/crop_data.json");

/// Daily yield category as recorded in the history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl YieldCategory {
    /// Numeric score used when averaging history
    pub fn score(&self) -> f64 {
        match self {
            YieldCategory::Excellent => 100.0,
            YieldCategory::Good => 80.0,
            YieldCategory::Fair => 60.0,
            YieldCategory::Poor => 40.0,
        }
    }

    /// Bucket a combined health/history score. No critical tier here.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            YieldCategory::Excellent
        } else if score >= 75.0 {
            YieldCategory::Good
        } else if score >= 60.0 {
            YieldCategory::Fair
        } else {
            YieldCategory::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            YieldCategory::Excellent => "Excellent",
            YieldCategory::Good => "Good",
            YieldCategory::Fair => "Fair",
            YieldCategory::Poor => "Poor",
        }
    }

    /// Trending up (excellent or good)
    pub fn is_favorable(&self) -> bool {
        matches!(self, YieldCategory::Excellent | YieldCategory::Good)
    }
}

/// One day of the yield log. Other recorded fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyYield {
    #[serde(rename = "yield")]
    pub category: YieldCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    #[serde(rename = "lastWeek", default)]
    pub last_week: Vec<DailyYield>,
}

/// A single crop entry of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Table key, e.g. "tomato"
    #[serde(skip)]
    pub id: String,

    /// Display name, e.g. "Tomato"
    pub name: String,

    #[serde(rename = "optimalConditions")]
    pub optimal_conditions: OptimalConditions,

    #[serde(rename = "historicalData", default)]
    pub historical_data: HistoricalData,
}

impl CropProfile {
    /// Mean yield score over the last week.
    ///
    /// An empty log divides by one, so it averages to 0.
    pub fn historical_average(&self) -> f64 {
        let days = &self.historical_data.last_week;
        let total: f64 = days.iter().map(|day| day.category.score()).sum();
        total / days.len().max(1) as f64
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    crops: serde_json::Map<String, serde_json::Value>,
}

/// Immutable crop reference table
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
    index: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// Shared catalog parsed from the built-in reference data on first use
    pub fn builtin() -> Result<&'static CropCatalog, CatalogError> {
        static BUILTIN: OnceLock<CropCatalog> = OnceLock::new();

        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_json_str(BUILTIN_CROP_DATA)?;
        Ok(BUILTIN.get_or_init(|| catalog))
    }

    /// Load a reference document from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a `{"crops": {<id>: {...}}}` document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let profiles = raw
            .crops
            .into_iter()
            .map(|(id, value)| {
                let mut profile: CropProfile = serde_json::from_value(value)
                    .map_err(|source| CatalogError::InvalidCrop {
                        crop: id.clone(),
                        source,
                    })?;
                profile.id = id;
                Ok(profile)
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Self::from_profiles(profiles)
    }

    /// Build from already-constructed profiles.
    ///
    /// Identifiers must be non-empty and unique; every range must be valid.
    pub fn from_profiles(crops: Vec<CropProfile>) -> Result<Self, CatalogError> {
        if crops.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, crop) in crops.iter().enumerate() {
            if crop.id.is_empty() {
                return Err(CatalogError::MissingId(crop.name.clone()));
            }
            if index.insert(crop.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCrop(crop.id.clone()));
            }
            for (parameter, range) in crop.optimal_conditions.iter() {
                if !range.is_valid() {
                    return Err(CatalogError::InvalidRange {
                        crop: crop.id.clone(),
                        parameter,
                        min: range.min,
                        ideal: range.ideal,
                        max: range.max,
                    });
                }
            }
            if crop.historical_data.last_week.is_empty() {
                tracing::warn!("Crop '{}' has no yield history; historical average is 0", crop.id);
            }
        }

        tracing::info!("Loaded crop catalog ({} crops)", crops.len());

        Ok(Self { crops, index })
    }

    pub fn get(&self, crop_id: &str) -> Option<&CropProfile> {
        self.index.get(crop_id).map(|&i| &self.crops[i])
    }

    /// Crop identifiers in definition order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.crops.iter().map(|crop| crop.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
