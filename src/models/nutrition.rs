//! Nutrition analysis payloads
//!
//! Mirrors the JSON shape returned by the Edamam nutrition-details API.
//! Deserialization is lenient: any missing field defaults to zero or empty so
//! a sparse response never fails the whole analysis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Nutrient codes used in `NutritionResult::total_nutrients` keys
pub mod codes {
    /// Energy, kcal
    pub const ENERC_KCAL: &str = "ENERC_KCAL";
    /// Total fat, g
    pub const FAT: &str = "FAT";
    /// Saturated fat, g
    pub const FASAT: &str = "FASAT";
    /// Carbohydrates, g
    pub const CHOCDF: &str = "CHOCDF";
    /// Sugars, g
    pub const SUGAR: &str = "SUGAR";
    /// Protein, g
    pub const PROCNT: &str = "PROCNT";
    /// Fiber, g
    pub const FIBTG: &str = "FIBTG";
    /// Sodium, mg
    pub const NA: &str = "NA";
}

/// One nutrient value with its display label and unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientInfo {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl NutrientInfo {
    pub fn new(label: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Aggregate analysis result for one batch of ingredient lines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub total_weight: f64,
    #[serde(default)]
    pub diet_labels: Vec<String>,
    #[serde(default)]
    pub health_labels: Vec<String>,
    #[serde(default)]
    pub total_nutrients: HashMap<String, NutrientInfo>,
}

impl NutritionResult {
    /// Quantity for a nutrient code, or `None` when the response omitted it
    pub fn nutrient_quantity(&self, code: &str) -> Option<f64> {
        self.total_nutrients.get(code).map(|n| n.quantity)
    }

    /// Quantity for a nutrient code, treating an omitted nutrient as zero
    pub fn nutrient_or_zero(&self, code: &str) -> f64 {
        self.nutrient_quantity(code).unwrap_or(0.0)
    }
}
