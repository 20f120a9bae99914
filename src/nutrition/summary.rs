//! Display aggregation for analysis results
//!
//! Pure transformation of a [`NutritionResult`] into display-ready values:
//! the four primary macros rounded to whole units, the four secondary
//! nutrients rounded to two decimals, and a protein/carb/fat percentage
//! breakdown for charting. A nutrient code missing from the response counts
//! as zero, so this always produces output, including for an all-zero
//! result.

use serde::Serialize;

use crate::models::{codes, NutritionResult};

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to the nearest whole unit for display
fn round_whole(value: f64) -> u32 {
    value.round() as u32
}

/// Primary macro display values, whole units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroSummary {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl MacroSummary {
    pub fn from_result(result: &NutritionResult) -> Self {
        Self {
            calories: round_whole(result.calories),
            protein_g: round_whole(result.nutrient_or_zero(codes::PROCNT)),
            carbs_g: round_whole(result.nutrient_or_zero(codes::CHOCDF)),
            fat_g: round_whole(result.nutrient_or_zero(codes::FAT)),
        }
    }
}

/// Secondary nutrient display values, two decimal places
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientDetails {
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub saturated_fat_g: f64,
    pub sodium_mg: f64,
}

impl NutrientDetails {
    pub fn from_result(result: &NutritionResult) -> Self {
        Self {
            fiber_g: round2(result.nutrient_or_zero(codes::FIBTG)),
            sugar_g: round2(result.nutrient_or_zero(codes::SUGAR)),
            saturated_fat_g: round2(result.nutrient_or_zero(codes::FASAT)),
            sodium_mg: round2(result.nutrient_or_zero(codes::NA)),
        }
    }
}

/// One macro's slice of the chart: rounded grams and percentage share
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroShare {
    pub grams: u32,
    pub percent: f64,
}

/// Proportional protein/carb/fat breakdown by rounded gram value.
/// All shares are 0% when the combined total is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: MacroShare,
    pub carbs: MacroShare,
    pub fat: MacroShare,
}

impl MacroBreakdown {
    pub fn from_macros(macros: &MacroSummary) -> Self {
        // u64: the three u32 gram values can exceed u32::MAX combined
        let total = u64::from(macros.protein_g)
            + u64::from(macros.carbs_g)
            + u64::from(macros.fat_g);
        let share = |grams: u32| MacroShare {
            grams,
            percent: if total == 0 {
                0.0
            } else {
                round2(f64::from(grams) * 100.0 / total as f64)
            },
        };

        Self {
            protein: share(macros.protein_g),
            carbs: share(macros.carbs_g),
            fat: share(macros.fat_g),
        }
    }
}

/// Complete display aggregation of one analysis result
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub macros: MacroSummary,
    pub details: NutrientDetails,
    pub breakdown: MacroBreakdown,
    pub total_weight_g: u32,
    pub diet_labels: Vec<String>,
    pub health_labels: Vec<String>,
}

impl AnalysisSummary {
    pub fn from_result(result: &NutritionResult) -> Self {
        let macros = MacroSummary::from_result(result);
        let breakdown = MacroBreakdown::from_macros(&macros);
        Self {
            macros,
            details: NutrientDetails::from_result(result),
            breakdown,
            total_weight_g: round_whole(result.total_weight),
            diet_labels: result.diet_labels.clone(),
            health_labels: result.health_labels.clone(),
        }
    }
}
