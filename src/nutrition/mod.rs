//! Nutrition analysis module
//!
//! Handles the batch nutrition request and result aggregation.

pub mod client;
pub mod summary;

pub use client::{NutritionClient, RequestError};
pub use summary::{AnalysisSummary, MacroBreakdown, MacroShare, MacroSummary, NutrientDetails};
